use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JerseyDesign::Table)
                    .col(
                        ColumnDef::new(JerseyDesign::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::JerseyType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::FrontPrimaryColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::FrontSecondaryColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::FrontTextColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::FrontNumber)
                            .string_len(2)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::FrontPattern)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(JerseyDesign::FrontLogo).string().null())
                    .col(
                        ColumnDef::new(JerseyDesign::FrontLogoSize)
                            .double()
                            .not_null()
                            .default(0.5),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::BackPrimaryColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::BackSecondaryColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::BackTextColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::BackName)
                            .string_len(15)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::BackNumber)
                            .string_len(2)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(JerseyDesign::BackPattern)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(JerseyDesign::BackLogo).string().null())
                    .col(
                        ColumnDef::new(JerseyDesign::BackLogoSize)
                            .double()
                            .not_null()
                            .default(0.5),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(JerseyDesign::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum JerseyDesign {
    Table,
    Id,
    Name,
    CreatedAt,
    JerseyType,
    FrontPrimaryColor,
    FrontSecondaryColor,
    FrontTextColor,
    FrontNumber,
    FrontPattern,
    FrontLogo,
    FrontLogoSize,
    BackPrimaryColor,
    BackSecondaryColor,
    BackTextColor,
    BackName,
    BackNumber,
    BackPattern,
    BackLogo,
    BackLogoSize,
}

use crate::db::postgres_service::PostgresService;
use crate::types::{design::DBDesignCreate, error::AppError};
use chrono::Utc;
use entity::jersey_design::{
    ActiveModel as DesignActive, Entity as JerseyDesign, Model as DesignModel,
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, Set};

impl PostgresService {
    /// Persist one saved customization. `created_at` is always server-set.
    pub async fn create_design(&self, payload: DBDesignCreate) -> Result<i32, AppError> {
        let inserted = DesignActive {
            name: Set(payload.name),
            created_at: Set(Utc::now()),
            jersey_type: Set(payload.jersey_type),
            front_primary_color: Set(payload.front_primary_color),
            front_secondary_color: Set(payload.front_secondary_color),
            front_text_color: Set(payload.front_text_color),
            front_number: Set(payload.front_number),
            front_pattern: Set(payload.front_pattern),
            front_logo: Set(payload.front_logo),
            front_logo_size: Set(payload.front_logo_size),
            back_primary_color: Set(payload.back_primary_color),
            back_secondary_color: Set(payload.back_secondary_color),
            back_text_color: Set(payload.back_text_color),
            back_name: Set(payload.back_name),
            back_number: Set(payload.back_number),
            back_pattern: Set(payload.back_pattern),
            back_logo: Set(payload.back_logo),
            back_logo_size: Set(payload.back_logo_size),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(inserted.id)
    }

    pub async fn get_design_by_id(&self, id: i32) -> Result<DesignModel, AppError> {
        Ok(JerseyDesign::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Design does not exist".into()))?)
    }

    pub async fn count_designs(&self) -> Result<u64, AppError> {
        Ok(JerseyDesign::find().count(&self.db).await?)
    }
}

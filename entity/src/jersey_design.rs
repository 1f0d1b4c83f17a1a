use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jersey_design")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub jersey_type: String,

    // Front design
    pub front_primary_color: String,
    pub front_secondary_color: String,
    pub front_text_color: String,
    pub front_number: String,
    pub front_pattern: String,
    pub front_logo: Option<String>, // media path under logos/
    pub front_logo_size: f64,

    // Back design
    pub back_primary_color: String,
    pub back_secondary_color: String,
    pub back_text_color: String,
    pub back_name: String,
    pub back_number: String,
    pub back_pattern: String,
    pub back_logo: Option<String>,
    pub back_logo_size: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

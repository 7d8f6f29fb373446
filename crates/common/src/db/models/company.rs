//! Company entity
//!
//! Read-mostly reference data: the service only reads companies, never
//! writes them. The AI summary fields are pre-computed upstream.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub address: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub employee_count: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub established: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub capital: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub business: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub hero_image_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub tagline: Option<String>,

    /// Pre-computed AI summary, if one exists
    #[sea_orm(column_type = "Text", nullable)]
    pub overall_summary: Option<String>,

    pub pros: Vec<String>,

    pub cons: Vec<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article::Entity")]
    Articles,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Articles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

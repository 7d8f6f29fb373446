//! SeaORM entity models
//!
//! Database entities for the review service

mod article;
mod company;

pub use article::{
    ActiveModel as ArticleActiveModel, Column as ArticleColumn, Entity as ArticleEntity,
    Model as Article,
};

pub use company::{
    ActiveModel as CompanyActiveModel, Column as CompanyColumn, Entity as CompanyEntity,
    Model as Company,
};

use sea_orm::entity::prelude::*;

use crate::education::application::domain::entities::Education;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Education {
            id: model.id,
            degree: model.degree,
            institution: model.institution,
            year: model.year,
            description: model.description,
        }
    }
}

use sea_orm::entity::prelude::*;

use crate::profile::application::domain::entities::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub residence: Option<String>,
    pub image_file: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Profile {
            id: model.id,
            name: model.name,
            bio: model.bio,
            phone: model.phone,
            email: model.email,
            residence: model.residence,
            image_file: model.image_file,
        }
    }
}

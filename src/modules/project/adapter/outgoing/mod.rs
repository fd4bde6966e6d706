mod project_query_sea_orm;
mod project_repository_sea_orm;
pub mod sea_orm_entity;

pub use project_query_sea_orm::ProjectQuerySeaOrm;
pub use project_repository_sea_orm::ProjectRepositorySeaOrm;

mod education_query_sea_orm;
mod education_repository_sea_orm;
pub mod sea_orm_entity;

pub use education_query_sea_orm::EducationQuerySeaOrm;
pub use education_repository_sea_orm::EducationRepositorySeaOrm;

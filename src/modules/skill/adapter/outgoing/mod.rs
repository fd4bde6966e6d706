pub mod sea_orm_entity;
mod skill_query_sea_orm;
mod skill_repository_sea_orm;

pub use skill_query_sea_orm::SkillQuerySeaOrm;
pub use skill_repository_sea_orm::SkillRepositorySeaOrm;

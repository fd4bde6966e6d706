mod profile_repository_sea_orm;
pub mod sea_orm_entity;

pub use profile_repository_sea_orm::ProfileRepositorySeaOrm;

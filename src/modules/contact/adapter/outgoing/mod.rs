mod message_query_sea_orm;
mod message_repository_sea_orm;
pub mod sea_orm_entity;

pub use message_query_sea_orm::MessageQuerySeaOrm;
pub use message_repository_sea_orm::MessageRepositorySeaOrm;

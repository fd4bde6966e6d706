use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;
use crate::auth::application::domain::entities::{AdminUser, UserId};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl UserRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    // Postgres reports 23505, SQLite "UNIQUE constraint failed"
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::UsernameTaken;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositorySeaOrm {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            password: Set(password_hash.to_string()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(AdminUser {
            id: UserId::from(inserted.id),
            username: inserted.username,
            password_hash: inserted.password,
        })
    }
}

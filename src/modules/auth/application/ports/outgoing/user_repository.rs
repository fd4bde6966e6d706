use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminUser;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `password_hash` must already be a PHC string.
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, UserRepositoryError>;
}

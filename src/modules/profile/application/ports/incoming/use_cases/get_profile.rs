use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProfileError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for GetProfileError {
    fn from(e: ProfileRepositoryError) -> Self {
        GetProfileError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError>;
}

use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnsureProfileError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for EnsureProfileError {
    fn from(e: ProfileRepositoryError) -> Self {
        EnsureProfileError::RepositoryError(e.to_string())
    }
}

/// Returns the profile, persisting a placeholder first if none exists.
#[async_trait]
pub trait EnsureProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, EnsureProfileError>;
}

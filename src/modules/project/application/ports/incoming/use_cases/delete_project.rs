use async_trait::async_trait;

use crate::project::application::ports::outgoing::ProjectRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("project not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for DeleteProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        match e {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteProjectError>;
}

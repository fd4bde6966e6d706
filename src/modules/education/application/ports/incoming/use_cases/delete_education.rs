use async_trait::async_trait;

use crate::education::application::ports::outgoing::EducationRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteEducationError {
    #[error("education entry not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<EducationRepositoryError> for DeleteEducationError {
    fn from(e: EducationRepositoryError) -> Self {
        match e {
            EducationRepositoryError::NotFound => DeleteEducationError::NotFound,
            EducationRepositoryError::DatabaseError(msg) => {
                DeleteEducationError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteEducationError>;
}

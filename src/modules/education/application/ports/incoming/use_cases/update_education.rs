use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::{EducationData, EducationRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateEducationError {
    #[error("education entry not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<EducationRepositoryError> for UpdateEducationError {
    fn from(e: EducationRepositoryError) -> Self {
        match e {
            EducationRepositoryError::NotFound => UpdateEducationError::NotFound,
            EducationRepositoryError::DatabaseError(msg) => {
                UpdateEducationError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(&self, id: i32, data: EducationData)
        -> Result<Education, UpdateEducationError>;
}

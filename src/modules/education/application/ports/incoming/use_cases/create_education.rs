use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::{EducationData, EducationRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateEducationError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<EducationRepositoryError> for CreateEducationError {
    fn from(e: EducationRepositoryError) -> Self {
        CreateEducationError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, data: EducationData) -> Result<Education, CreateEducationError>;
}

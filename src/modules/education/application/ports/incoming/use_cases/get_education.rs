use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::EducationQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetEducationError {
    #[error("query error: {0}")]
    QueryError(#[from] EducationQueryError),
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError>;
}

use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::EducationQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleEducationError {
    #[error("education entry not found")]
    NotFound,

    #[error("query error: {0}")]
    QueryError(#[from] EducationQueryError),
}

#[async_trait]
pub trait GetSingleEducationUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Education, GetSingleEducationError>;
}

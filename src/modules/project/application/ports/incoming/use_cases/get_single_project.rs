use async_trait::async_trait;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::ProjectQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("project not found")]
    NotFound,

    #[error("query error: {0}")]
    QueryError(#[from] ProjectQueryError),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Project, GetSingleProjectError>;
}

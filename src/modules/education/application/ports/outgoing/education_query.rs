use async_trait::async_trait;

use crate::education::application::domain::entities::Education;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EducationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationQuery: Send + Sync {
    async fn list_education(&self) -> Result<Vec<Education>, EducationQueryError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Education>, EducationQueryError>;
    async fn has_any(&self) -> Result<bool, EducationQueryError>;
}

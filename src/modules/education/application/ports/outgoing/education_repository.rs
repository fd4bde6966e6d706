use async_trait::async_trait;

use crate::education::application::domain::entities::Education;

/// Every column of an education row except the id; used for insert and overwrite alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationData {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create_education(
        &self,
        data: EducationData,
    ) -> Result<Education, EducationRepositoryError>;
    async fn update_education(
        &self,
        id: i32,
        data: EducationData,
    ) -> Result<Education, EducationRepositoryError>;
    async fn delete_education(&self, id: i32) -> Result<(), EducationRepositoryError>;
}

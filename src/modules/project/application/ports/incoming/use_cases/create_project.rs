use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::incoming::use_cases::ImageUploadError;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::ProjectRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectCommand {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("image upload failed: {0}")]
    Upload(#[from] ImageUploadError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        CreateProjectError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError>;
}

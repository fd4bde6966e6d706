use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::incoming::use_cases::ImageUploadError;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{ProjectQueryError, ProjectRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectCommand {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    /// Replaces the current image only if accepted by the upload policy
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("project not found")]
    NotFound,

    #[error("image upload failed: {0}")]
    Upload(#[from] ImageUploadError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for UpdateProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        match e {
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => UpdateProjectError::RepositoryError(msg),
        }
    }
}

impl From<ProjectQueryError> for UpdateProjectError {
    fn from(e: ProjectQueryError) -> Self {
        UpdateProjectError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        command: UpdateProjectCommand,
    ) -> Result<Project, UpdateProjectError>;
}

use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::incoming::use_cases::ImageUploadError;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::ProfileRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    pub name: String,
    pub bio: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub residence: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("profile not found")]
    NotFound,

    #[error("image upload failed: {0}")]
    Upload(#[from] ImageUploadError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProfileRepositoryError> for UpdateProfileError {
    fn from(e: ProfileRepositoryError) -> Self {
        match e {
            ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
            other => UpdateProfileError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile, UpdateProfileError>;
}

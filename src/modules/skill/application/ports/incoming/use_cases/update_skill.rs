use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::incoming::use_cases::ImageUploadError;
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::{SkillQueryError, SkillRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSkillCommand {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("skill not found")]
    NotFound,

    #[error("image upload failed: {0}")]
    Upload(#[from] ImageUploadError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for UpdateSkillError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => UpdateSkillError::RepositoryError(msg),
        }
    }
}

impl From<SkillQueryError> for UpdateSkillError {
    fn from(e: SkillQueryError) -> Self {
        UpdateSkillError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: i32, command: UpdateSkillCommand) -> Result<Skill, UpdateSkillError>;
}

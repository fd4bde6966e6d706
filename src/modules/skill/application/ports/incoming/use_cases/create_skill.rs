use async_trait::async_trait;

use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::incoming::use_cases::ImageUploadError;
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::SkillRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSkillCommand {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("image upload failed: {0}")]
    Upload(#[from] ImageUploadError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for CreateSkillError {
    fn from(e: SkillRepositoryError) -> Self {
        CreateSkillError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: CreateSkillCommand) -> Result<Skill, CreateSkillError>;
}

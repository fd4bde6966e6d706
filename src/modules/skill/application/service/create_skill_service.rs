use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::ImageUploader;
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, CreateSkillUseCase,
};
use crate::skill::application::ports::outgoing::{CreateSkillData, SkillRepository};

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
    uploader: Arc<dyn ImageUploader>,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R, uploader: Arc<dyn ImageUploader>) -> Self {
        Self {
            skill_repository,
            uploader,
        }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self, command: CreateSkillCommand) -> Result<Skill, CreateSkillError> {
        let image_file = self
            .uploader
            .store(command.image)
            .await?
            .unwrap_or_else(|| UploadPolicy::DEFAULT_IMAGE.to_string());

        let skill = self
            .skill_repository
            .create_skill(CreateSkillData {
                name: command.name,
                description: command.description,
                image_file,
            })
            .await?;

        Ok(skill)
    }
}

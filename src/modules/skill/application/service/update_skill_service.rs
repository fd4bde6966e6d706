use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::ports::incoming::use_cases::ImageUploader;
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::incoming::use_cases::{
    UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase,
};
use crate::skill::application::ports::outgoing::{SkillQuery, SkillRepository, UpdateSkillData};

pub struct UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    skill_query: Q,
    skill_repository: R,
    uploader: Arc<dyn ImageUploader>,
}

impl<Q, R> UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    pub fn new(skill_query: Q, skill_repository: R, uploader: Arc<dyn ImageUploader>) -> Self {
        Self {
            skill_query,
            skill_repository,
            uploader,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateSkillUseCase for UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    async fn execute(&self, id: i32, command: UpdateSkillCommand) -> Result<Skill, UpdateSkillError> {
        if self.skill_query.get_by_id(id).await?.is_none() {
            return Err(UpdateSkillError::NotFound);
        }

        let image_file = self.uploader.store(command.image).await?;

        let skill = self
            .skill_repository
            .update_skill(
                id,
                UpdateSkillData {
                    name: command.name,
                    description: command.description,
                    image_file,
                },
            )
            .await?;

        Ok(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::mocks::{MockSkillQuery, MockSkillRepo, MockUploader};

    fn command() -> UpdateSkillCommand {
        UpdateSkillCommand {
            name: "Go".to_string(),
            description: Some("Concurrency".to_string()),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_update_passes_no_image_when_nothing_uploaded() {
        let mut query = MockSkillQuery::new();
        query.expect_get_by_id().returning(|id| {
            Ok(Some(Skill {
                id,
                name: "Rust".to_string(),
                description: None,
                image_file: "rust.png".to_string(),
            }))
        });

        let mut uploader = MockUploader::new();
        uploader.expect_store().returning(|_| Ok(None));

        let mut repo = MockSkillRepo::new();
        repo.expect_update_skill()
            .withf(|id, data| *id == 2 && data.image_file.is_none() && data.name == "Go")
            .times(1)
            .returning(|id, data| {
                Ok(Skill {
                    id,
                    name: data.name,
                    description: data.description,
                    image_file: "rust.png".to_string(),
                })
            });

        let service = UpdateSkillService::new(query, repo, Arc::new(uploader));
        let skill = service.execute(2, command()).await.unwrap();

        assert_eq!(skill.image_file, "rust.png");
        assert_eq!(skill.description.as_deref(), Some("Concurrency"));
    }

    #[tokio::test]
    async fn test_unknown_skill_is_not_found() {
        let mut query = MockSkillQuery::new();
        query.expect_get_by_id().returning(|_| Ok(None));

        let service = UpdateSkillService::new(
            query,
            MockSkillRepo::new(),
            Arc::new(MockUploader::new()),
        );

        let result = service.execute(50, command()).await;
        assert!(matches!(result, Err(UpdateSkillError::NotFound)));
    }
}

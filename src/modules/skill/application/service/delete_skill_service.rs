use async_trait::async_trait;

use crate::skill::application::ports::incoming::use_cases::{DeleteSkillError, DeleteSkillUseCase};
use crate::skill::application::ports::outgoing::SkillRepository;

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    skill_repository: R,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repository: R) -> Self {
        Self { skill_repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteSkillError> {
        Ok(self.skill_repository.delete_skill(id).await?)
    }
}

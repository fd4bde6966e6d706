use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::incoming::use_cases::{GetSkillsError, GetSkillsUseCase};
use crate::skill::application::ports::outgoing::SkillQuery;

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    skill_query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(skill_query: Q) -> Self {
        Self { skill_query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery,
{
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        Ok(self.skill_query.list_skills().await?)
    }
}

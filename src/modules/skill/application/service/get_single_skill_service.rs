use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::incoming::use_cases::{
    GetSingleSkillError, GetSingleSkillUseCase,
};
use crate::skill::application::ports::outgoing::SkillQuery;

pub struct GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    skill_query: Q,
}

impl<Q> GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(skill_query: Q) -> Self {
        Self { skill_query }
    }
}

#[async_trait]
impl<Q> GetSingleSkillUseCase for GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    async fn execute(&self, id: i32) -> Result<Skill, GetSingleSkillError> {
        self.skill_query
            .get_by_id(id)
            .await?
            .ok_or(GetSingleSkillError::NotFound)
    }
}

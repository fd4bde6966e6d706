use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::SkillQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleSkillError {
    #[error("skill not found")]
    NotFound,

    #[error("query error: {0}")]
    QueryError(#[from] SkillQueryError),
}

#[async_trait]
pub trait GetSingleSkillUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Skill, GetSingleSkillError>;
}

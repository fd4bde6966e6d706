use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::SkillQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSkillsError {
    #[error("query error: {0}")]
    QueryError(#[from] SkillQueryError),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError>;
}

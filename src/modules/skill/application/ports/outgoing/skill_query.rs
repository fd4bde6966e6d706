use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillQueryError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Skill>, SkillQueryError>;
    async fn has_any(&self) -> Result<bool, SkillQueryError>;
}

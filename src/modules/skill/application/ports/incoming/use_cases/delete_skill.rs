use async_trait::async_trait;

use crate::skill::application::ports::outgoing::SkillRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("skill not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<SkillRepositoryError> for DeleteSkillError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
            SkillRepositoryError::DatabaseError(msg) => DeleteSkillError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteSkillError>;
}

use async_trait::async_trait;

use crate::skill::application::domain::entities::Skill;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSkillData {
    pub name: String,
    pub description: Option<String>,
    pub image_file: String,
}

/// `image_file: None` keeps the current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSkillData {
    pub name: String,
    pub description: Option<String>,
    pub image_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError>;
    async fn create_skills(&self, data: Vec<CreateSkillData>) -> Result<u64, SkillRepositoryError>;
    async fn update_skill(
        &self,
        id: i32,
        data: UpdateSkillData,
    ) -> Result<Skill, SkillRepositoryError>;
    async fn delete_skill(&self, id: i32) -> Result<(), SkillRepositoryError>;
}

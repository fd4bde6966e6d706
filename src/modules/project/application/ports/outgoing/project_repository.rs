// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub image_file: String,
    pub link: Option<String>,
}

/// Full overwrite of the editable columns.
///
/// `image_file: None` keeps whatever image the row already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectData {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub image_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: CreateProjectData)
        -> Result<Project, ProjectRepositoryError>;

    /// Inserts all rows in one statement. Returns how many were written.
    async fn create_projects(
        &self,
        data: Vec<CreateProjectData>,
    ) -> Result<u64, ProjectRepositoryError>;

    async fn update_project(
        &self,
        id: i32,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(&self, id: i32) -> Result<(), ProjectRepositoryError>;
}

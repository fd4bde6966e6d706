// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Insertion order (ascending id)
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Project>, ProjectQueryError>;

    async fn has_any(&self) -> Result<bool, ProjectQueryError>;
}

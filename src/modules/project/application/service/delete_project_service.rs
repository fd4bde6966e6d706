use async_trait::async_trait;

use crate::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteProjectError> {
        self.project_repository.delete_project(id).await?;
        Ok(())
    }
}

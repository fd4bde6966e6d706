use async_trait::async_trait;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::project::application::ports::outgoing::ProjectQuery;

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        Ok(self.project_query.list_projects().await?)
    }
}

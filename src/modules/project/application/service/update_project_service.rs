use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::ports::incoming::use_cases::ImageUploader;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::{
    ProjectQuery, ProjectRepository, UpdateProjectData,
};

pub struct UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    project_query: Q,
    project_repository: R,
    uploader: Arc<dyn ImageUploader>,
}

impl<Q, R> UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(project_query: Q, project_repository: R, uploader: Arc<dyn ImageUploader>) -> Self {
        Self {
            project_query,
            project_repository,
            uploader,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateProjectUseCase for UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(
        &self,
        id: i32,
        command: UpdateProjectCommand,
    ) -> Result<Project, UpdateProjectError> {
        // Unknown ids must not leave a stray file behind
        if self.project_query.get_by_id(id).await?.is_none() {
            return Err(UpdateProjectError::NotFound);
        }

        let image_file = self.uploader.store(command.image).await?;

        let project = self
            .project_repository
            .update_project(
                id,
                UpdateProjectData {
                    title: command.title,
                    description: command.description,
                    link: command.link,
                    image_file,
                },
            )
            .await?;

        Ok(project)
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::ImageUploader;
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::project::application::ports::outgoing::{CreateProjectData, ProjectRepository};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    uploader: Arc<dyn ImageUploader>,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R, uploader: Arc<dyn ImageUploader>) -> Self {
        Self {
            project_repository,
            uploader,
        }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        let image_file = self
            .uploader
            .store(command.image)
            .await?
            .unwrap_or_else(|| UploadPolicy::DEFAULT_IMAGE.to_string());

        let project = self
            .project_repository
            .create_project(CreateProjectData {
                title: command.title,
                description: command.description,
                image_file,
                link: command.link,
            })
            .await?;

        Ok(project)
    }
}

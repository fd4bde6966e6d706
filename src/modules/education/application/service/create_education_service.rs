use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase,
};
use crate::education::application::ports::outgoing::{EducationData, EducationRepository};

pub struct CreateEducationService<R>
where
    R: EducationRepository,
{
    education_repository: R,
}

impl<R> CreateEducationService<R>
where
    R: EducationRepository,
{
    pub fn new(education_repository: R) -> Self {
        Self {
            education_repository,
        }
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for CreateEducationService<R>
where
    R: EducationRepository,
{
    async fn execute(&self, data: EducationData) -> Result<Education, CreateEducationError> {
        Ok(self.education_repository.create_education(data).await?)
    }
}

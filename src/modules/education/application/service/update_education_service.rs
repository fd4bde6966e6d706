use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::incoming::use_cases::{
    UpdateEducationError, UpdateEducationUseCase,
};
use crate::education::application::ports::outgoing::{EducationData, EducationRepository};

pub struct UpdateEducationService<R>
where
    R: EducationRepository,
{
    education_repository: R,
}

impl<R> UpdateEducationService<R>
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
impl<R> UpdateEducationUseCase for UpdateEducationService<R>
where
    R: EducationRepository,
{
    async fn execute(
        &self,
        id: i32,
        data: EducationData,
    ) -> Result<Education, UpdateEducationError> {
        Ok(self.education_repository.update_education(id, data).await?)
    }
}

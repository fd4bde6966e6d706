use async_trait::async_trait;

use crate::education::application::ports::incoming::use_cases::{
    DeleteEducationError, DeleteEducationUseCase,
};
use crate::education::application::ports::outgoing::EducationRepository;

pub struct DeleteEducationService<R>
where
    R: EducationRepository,
{
    education_repository: R,
}

impl<R> DeleteEducationService<R>
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
impl<R> DeleteEducationUseCase for DeleteEducationService<R>
where
    R: EducationRepository,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteEducationError> {
        Ok(self.education_repository.delete_education(id).await?)
    }
}

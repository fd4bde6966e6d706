use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::incoming::use_cases::{
    GetEducationError, GetEducationUseCase,
};
use crate::education::application::ports::outgoing::EducationQuery;

pub struct GetEducationService<Q>
where
    Q: EducationQuery,
{
    education_query: Q,
}

impl<Q> GetEducationService<Q>
where
    Q: EducationQuery,
{
    pub fn new(education_query: Q) -> Self {
        Self { education_query }
    }
}

#[async_trait]
impl<Q> GetEducationUseCase for GetEducationService<Q>
where
    Q: EducationQuery,
{
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError> {
        Ok(self.education_query.list_education().await?)
    }
}

use async_trait::async_trait;

use crate::education::application::domain::entities::Education;
use crate::education::application::ports::incoming::use_cases::{
    GetSingleEducationError, GetSingleEducationUseCase,
};
use crate::education::application::ports::outgoing::EducationQuery;

pub struct GetSingleEducationService<Q>
where
    Q: EducationQuery,
{
    education_query: Q,
}

impl<Q> GetSingleEducationService<Q>
where
    Q: EducationQuery,
{
    pub fn new(education_query: Q) -> Self {
        Self { education_query }
    }
}

#[async_trait]
impl<Q> GetSingleEducationUseCase for GetSingleEducationService<Q>
where
    Q: EducationQuery,
{
    async fn execute(&self, id: i32) -> Result<Education, GetSingleEducationError> {
        self.education_query
            .get_by_id(id)
            .await?
            .ok_or(GetSingleEducationError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::education::application::ports::outgoing::EducationQueryError;
    use crate::tests::support::mocks::MockEducationQuery;

    #[tokio::test]
    async fn test_absent_row_is_not_found() {
        let mut query = MockEducationQuery::new();
        query.expect_get_by_id().returning(|_| Ok(None));

        let service = GetSingleEducationService::new(query);
        assert_eq!(
            service.execute(1).await,
            Err(GetSingleEducationError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let mut query = MockEducationQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(EducationQueryError::DatabaseError("x".to_string())));

        let service = GetSingleEducationService::new(query);
        assert!(matches!(
            service.execute(1).await,
            Err(GetSingleEducationError::QueryError(_))
        ));
    }
}

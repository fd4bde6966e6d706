use async_trait::async_trait;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectQuery;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    project_query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(project_query: Q) -> Self {
        Self { project_query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, id: i32) -> Result<Project, GetSingleProjectError> {
        self.project_query
            .get_by_id(id)
            .await?
            .ok_or(GetSingleProjectError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::ports::outgoing::ProjectQueryError;
    use crate::tests::support::mocks::MockProjectQuery;

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let mut query = MockProjectQuery::new();
        query.expect_get_by_id().returning(|_| Ok(None));

        let result = GetSingleProjectService::new(query).execute(1).await;
        assert_eq!(result, Err(GetSingleProjectError::NotFound));
    }

    #[tokio::test]
    async fn test_query_failure_is_propagated() {
        let mut query = MockProjectQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ProjectQueryError::DatabaseError("down".to_string())));

        let result = GetSingleProjectService::new(query).execute(1).await;
        assert!(matches!(result, Err(GetSingleProjectError::QueryError(_))));
    }
}

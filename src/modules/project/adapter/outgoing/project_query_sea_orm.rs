use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

#[derive(Clone)]
pub struct ProjectQuerySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl ProjectQuerySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectQuery for ProjectQuerySeaOrm {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Project>, ProjectQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Project::from))
    }

    async fn has_any(&self) -> Result<bool, ProjectQueryError> {
        let count = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        Ok(count > 0)
    }
}

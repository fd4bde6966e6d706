use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::education::adapter::outgoing::sea_orm_entity::education::{Column, Entity};
use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::{EducationQuery, EducationQueryError};

#[derive(Clone)]
pub struct EducationQuerySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl EducationQuerySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> EducationQueryError {
    EducationQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EducationQuery for EducationQuerySeaOrm {
    async fn list_education(&self) -> Result<Vec<Education>, EducationQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Education::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Education>, EducationQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Education::from))
    }

    async fn has_any(&self) -> Result<bool, EducationQueryError> {
        let count = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        Ok(count > 0)
    }
}

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::skill::adapter::outgoing::sea_orm_entity::skills::{Column, Entity};
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

#[derive(Clone)]
pub struct SkillQuerySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl SkillQuerySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SkillQuery for SkillQuerySeaOrm {
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Skill>, SkillQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Skill::from))
    }

    async fn has_any(&self) -> Result<bool, SkillQueryError> {
        let count = Entity::find().count(&*self.db).await.map_err(map_db_err)?;
        Ok(count > 0)
    }
}

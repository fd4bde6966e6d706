use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

use crate::skill::adapter::outgoing::sea_orm_entity::skills::{ActiveModel, Entity};
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError, UpdateSkillData,
};

#[derive(Clone)]
pub struct SkillRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

fn new_row(data: CreateSkillData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(data.name),
        description: Set(data.description),
        image_file: Set(data.image_file),
    }
}

#[async_trait]
impl SkillRepository for SkillRepositorySeaOrm {
    async fn create_skill(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError> {
        let inserted = new_row(data).insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn create_skills(&self, data: Vec<CreateSkillData>) -> Result<u64, SkillRepositoryError> {
        if data.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(data.into_iter().map(new_row))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update_skill(
        &self,
        id: i32,
        data: UpdateSkillData,
    ) -> Result<Skill, SkillRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.name = Set(data.name);
        model.description = Set(data.description);
        if let Some(image_file) = data.image_file {
            model.image_file = Set(image_file);
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn delete_skill(&self, id: i32) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

use crate::education::adapter::outgoing::sea_orm_entity::education::{ActiveModel, Entity};
use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::{
    EducationData, EducationRepository, EducationRepositoryError,
};

#[derive(Clone)]
pub struct EducationRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EducationRepository for EducationRepositorySeaOrm {
    async fn create_education(
        &self,
        data: EducationData,
    ) -> Result<Education, EducationRepositoryError> {
        let row = ActiveModel {
            id: NotSet,
            degree: Set(data.degree),
            institution: Set(data.institution),
            year: Set(data.year),
            description: Set(data.description),
        };

        let inserted = row.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn update_education(
        &self,
        id: i32,
        data: EducationData,
    ) -> Result<Education, EducationRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EducationRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.degree = Set(data.degree);
        model.institution = Set(data.institution);
        model.year = Set(data.year);
        model.description = Set(data.description);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn delete_education(&self, id: i32) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

use crate::project::adapter::outgoing::sea_orm_entity::projects::{ActiveModel, Entity};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

#[derive(Clone)]
pub struct ProjectRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn new_row(data: CreateProjectData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        title: Set(data.title),
        description: Set(data.description),
        image_file: Set(data.image_file),
        link: Set(data.link),
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositorySeaOrm {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let inserted = new_row(data).insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn create_projects(
        &self,
        data: Vec<CreateProjectData>,
    ) -> Result<u64, ProjectRepositoryError> {
        if data.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(data.into_iter().map(new_row))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn update_project(
        &self,
        id: i32,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.title = Set(data.title);
        model.description = Set(data.description);
        model.link = Set(data.link);
        if let Some(image_file) = data.image_file {
            model.image_file = Set(image_file);
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn delete_project(&self, id: i32) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

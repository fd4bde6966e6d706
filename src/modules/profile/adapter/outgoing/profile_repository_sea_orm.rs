use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::profile::adapter::outgoing::sea_orm_entity::profile::{ActiveModel, Entity};
use crate::profile::application::domain::entities::{Profile, PROFILE_ID};
use crate::profile::application::ports::outgoing::{
    NewProfileData, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};

#[derive(Clone)]
pub struct ProfileRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_error(e: DbErr) -> ProfileRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return ProfileRepositoryError::AlreadyExists;
    }
    map_db_err(e)
}

#[async_trait]
impl ProfileRepository for ProfileRepositorySeaOrm {
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = Entity::find_by_id(PROFILE_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Profile::from))
    }

    async fn create_profile(
        &self,
        data: NewProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let row = ActiveModel {
            id: Set(PROFILE_ID),
            name: Set(data.name),
            bio: Set(data.bio),
            phone: Set(data.phone),
            email: Set(data.email),
            residence: Set(data.residence),
            image_file: Set(data.image_file),
        };

        let inserted = row.insert(&*self.db).await.map_err(map_insert_error)?;
        Ok(inserted.into())
    }

    async fn update_profile(
        &self,
        data: UpdateProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let existing = Entity::find_by_id(PROFILE_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        model.name = Set(data.name);
        model.bio = Set(data.bio);
        model.phone = Set(data.phone);
        model.email = Set(data.email);
        model.residence = Set(data.residence);
        if let Some(image_file) = data.image_file {
            model.image_file = Set(image_file);
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }
}

use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfileData {
    pub name: String,
    pub bio: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub residence: Option<String>,
    pub image_file: String,
}

/// `image_file: None` keeps the current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileData {
    pub name: String,
    pub bio: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub residence: Option<String>,
    pub image_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile already exists")]
    AlreadyExists,

    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage for the single profile row keyed by `PROFILE_ID`.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Fails with `AlreadyExists` when the row is already there.
    async fn create_profile(&self, data: NewProfileData)
        -> Result<Profile, ProfileRepositoryError>;

    async fn update_profile(
        &self,
        data: UpdateProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;
}

use async_trait::async_trait;
use tracing::info;

use crate::media::application::domain::policies::UploadPolicy;
use crate::profile::application::domain::entities::{Profile, PLACEHOLDER_BIO, PLACEHOLDER_NAME};
use crate::profile::application::ports::incoming::use_cases::{
    EnsureProfileError, EnsureProfileUseCase,
};
use crate::profile::application::ports::outgoing::{
    NewProfileData, ProfileRepository, ProfileRepositoryError,
};

pub struct EnsureProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> EnsureProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }

    fn placeholder() -> NewProfileData {
        NewProfileData {
            name: PLACEHOLDER_NAME.to_string(),
            bio: PLACEHOLDER_BIO.to_string(),
            phone: None,
            email: None,
            residence: None,
            image_file: UploadPolicy::DEFAULT_IMAGE.to_string(),
        }
    }
}

#[async_trait]
impl<R> EnsureProfileUseCase for EnsureProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self) -> Result<Profile, EnsureProfileError> {
        if let Some(profile) = self.profile_repository.get_profile().await? {
            return Ok(profile);
        }

        match self.profile_repository.create_profile(Self::placeholder()).await {
            Ok(profile) => {
                info!("Created placeholder profile");
                Ok(profile)
            }
            // A concurrent first visit won the insert
            Err(ProfileRepositoryError::AlreadyExists) => self
                .profile_repository
                .get_profile()
                .await?
                .ok_or_else(|| {
                    EnsureProfileError::RepositoryError(
                        "profile vanished after duplicate insert".to_string(),
                    )
                }),
            Err(e) => Err(e.into()),
        }
    }
}

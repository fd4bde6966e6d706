use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::ports::incoming::use_cases::ImageUploader;
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, UpdateProfileData};

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
    uploader: Arc<dyn ImageUploader>,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R, uploader: Arc<dyn ImageUploader>) -> Self {
        Self {
            profile_repository,
            uploader,
        }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile, UpdateProfileError> {
        let image_file = self.uploader.store(command.image).await?;

        let profile = self
            .profile_repository
            .update_profile(UpdateProfileData {
                name: command.name,
                bio: command.bio,
                phone: command.phone,
                email: command.email,
                residence: command.residence,
                image_file,
            })
            .await?;

        Ok(profile)
    }
}

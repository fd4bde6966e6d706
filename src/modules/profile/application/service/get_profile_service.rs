use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
        Ok(self.profile_repository.get_profile().await?)
    }
}

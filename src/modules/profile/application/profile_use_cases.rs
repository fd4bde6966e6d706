use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    EnsureProfileUseCase, GetProfileUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub ensure: Arc<dyn EnsureProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}

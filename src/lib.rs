pub mod app;
pub mod config;
pub mod database;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, contact, education, media, profile, project, seed, site, skill};

use std::sync::Arc;

use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::education::application::education_use_cases::EducationUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::skill::application::skill_use_cases::SkillUseCases;

#[cfg(test)]
mod tests;

/// Everything a handler needs, built once at startup and shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub education: EducationUseCases,
    pub profile: ProfileUseCases,
    pub contact: ContactUseCases,
}

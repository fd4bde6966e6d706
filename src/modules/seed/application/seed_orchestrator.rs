use std::sync::Arc;

use tracing::info;

use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::education::application::ports::outgoing::{
    EducationQuery, EducationQueryError, EducationRepository, EducationRepositoryError,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::seed::application::content;
use crate::skill::application::ports::outgoing::{
    SkillQuery, SkillQueryError, SkillRepository, SkillRepositoryError,
};

// ============================================================================
// Input / Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// What a single run inserted. All zero/false on an already seeded database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub profile_created: bool,
    pub education_created: bool,
    pub skills_created: u64,
    pub projects_created: u64,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Password hashing failed: {0}")]
    Hash(#[from] HashError),

    #[error("User lookup failed: {0}")]
    UserQuery(#[from] UserQueryError),

    #[error("User insert failed: {0}")]
    UserRepository(#[from] UserRepositoryError),

    #[error("Profile seeding failed: {0}")]
    Profile(#[from] ProfileRepositoryError),

    #[error("Education lookup failed: {0}")]
    EducationQuery(#[from] EducationQueryError),

    #[error("Education insert failed: {0}")]
    EducationRepository(#[from] EducationRepositoryError),

    #[error("Skill lookup failed: {0}")]
    SkillQuery(#[from] SkillQueryError),

    #[error("Skill insert failed: {0}")]
    SkillRepository(#[from] SkillRepositoryError),

    #[error("Project lookup failed: {0}")]
    ProjectQuery(#[from] ProjectQueryError),

    #[error("Project insert failed: {0}")]
    ProjectRepository(#[from] ProjectRepositoryError),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Idempotent population of the admin account and sample content.
///
/// Every step checks for existing data first, so running it twice leaves
/// the database as the first run did.
#[derive(Clone)]
pub struct SeedOrchestrator {
    user_query: Arc<dyn UserQuery + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
    education_query: Arc<dyn EducationQuery + Send + Sync>,
    education_repository: Arc<dyn EducationRepository + Send + Sync>,
    skill_query: Arc<dyn SkillQuery + Send + Sync>,
    skill_repository: Arc<dyn SkillRepository + Send + Sync>,
    project_query: Arc<dyn ProjectQuery + Send + Sync>,
    project_repository: Arc<dyn ProjectRepository + Send + Sync>,
}

impl SeedOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_query: Arc<dyn UserQuery + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
        education_query: Arc<dyn EducationQuery + Send + Sync>,
        education_repository: Arc<dyn EducationRepository + Send + Sync>,
        skill_query: Arc<dyn SkillQuery + Send + Sync>,
        skill_repository: Arc<dyn SkillRepository + Send + Sync>,
        project_query: Arc<dyn ProjectQuery + Send + Sync>,
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            profile_repository,
            education_query,
            education_repository,
            skill_query,
            skill_repository,
            project_query,
            project_repository,
        }
    }

    pub async fn run(&self, admin: &AdminCredentials) -> Result<SeedReport, SeedError> {
        let report = SeedReport {
            admin_created: self.seed_admin(admin).await?,
            profile_created: self.seed_profile().await?,
            education_created: self.seed_education().await?,
            skills_created: self.seed_skills().await?,
            projects_created: self.seed_projects().await?,
        };

        Ok(report)
    }

    async fn seed_admin(&self, admin: &AdminCredentials) -> Result<bool, SeedError> {
        if self
            .user_query
            .find_by_username(&admin.username)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let hash = self.password_hasher.hash_password(&admin.password).await?;
        let user = self
            .user_repository
            .create_user(&admin.username, &hash)
            .await?;
        info!(user_id = %user.id, username = %user.username, "Admin user created");
        Ok(true)
    }

    async fn seed_profile(&self) -> Result<bool, SeedError> {
        if self.profile_repository.get_profile().await?.is_some() {
            return Ok(false);
        }

        match self.profile_repository.create_profile(content::profile()).await {
            Ok(_) => {
                info!("Profile seeded");
                Ok(true)
            }
            Err(ProfileRepositoryError::AlreadyExists) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn seed_education(&self) -> Result<bool, SeedError> {
        if self.education_query.has_any().await? {
            return Ok(false);
        }

        self.education_repository
            .create_education(content::education())
            .await?;
        info!("Education seeded");
        Ok(true)
    }

    async fn seed_skills(&self) -> Result<u64, SeedError> {
        if self.skill_query.has_any().await? {
            return Ok(0);
        }

        let count = self.skill_repository.create_skills(content::skills()).await?;
        info!(count, "Skills seeded");
        Ok(count)
    }

    async fn seed_projects(&self) -> Result<u64, SeedError> {
        if self.project_query.has_any().await? {
            return Ok(0);
        }

        let count = self
            .project_repository
            .create_projects(content::projects())
            .await?;
        info!(count, "Projects seeded");
        Ok(count)
    }
}

use std::sync::Arc;

use actix_web::web;
use sea_orm::DatabaseConnection;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQuerySeaOrm, UserRepositorySeaOrm};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::config::AppConfig;
use crate::contact::adapter::outgoing::{MessageQuerySeaOrm, MessageRepositorySeaOrm};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::service::{ListMessagesService, SubmitMessageService};
use crate::education::adapter::outgoing::{EducationQuerySeaOrm, EducationRepositorySeaOrm};
use crate::education::application::education_use_cases::EducationUseCases;
use crate::education::application::service::{
    CreateEducationService, DeleteEducationService, GetEducationService,
    GetSingleEducationService, UpdateEducationService,
};
use crate::media::adapter::outgoing::LocalImageStore;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::services::ImageUploadService;
use crate::media::application::ports::incoming::use_cases::ImageUploader;
use crate::profile::adapter::outgoing::ProfileRepositorySeaOrm;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    EnsureProfileService, GetProfileService, UpdateProfileService,
};
use crate::project::adapter::outgoing::{ProjectQuerySeaOrm, ProjectRepositorySeaOrm};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::seed::application::SeedOrchestrator;
use crate::shared::web::form_config::custom_form_config;
use crate::shared::web::{FlashSigner, PageRenderer};
use crate::skill::adapter::outgoing::{SkillQuerySeaOrm, SkillRepositorySeaOrm};
use crate::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSingleSkillService, GetSkillsService,
    UpdateSkillService,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::AppState;

/// Wires every adapter to its use cases over one connection pool.
pub fn build_state(
    db: Arc<DatabaseConnection>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    uploader: Arc<dyn ImageUploader>,
) -> AppState {
    let user_query = UserQuerySeaOrm::new(Arc::clone(&db));
    let login_user_use_case = LoginUserUseCase::new(user_query, password_hasher, token_provider);

    let project_query = ProjectQuerySeaOrm::new(Arc::clone(&db));
    let project_repo = ProjectRepositorySeaOrm::new(Arc::clone(&db));
    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(
            project_repo.clone(),
            Arc::clone(&uploader),
        )),
        update: Arc::new(UpdateProjectService::new(
            project_query.clone(),
            project_repo.clone(),
            Arc::clone(&uploader),
        )),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query)),
    };

    let skill_query = SkillQuerySeaOrm::new(Arc::clone(&db));
    let skill_repo = SkillRepositorySeaOrm::new(Arc::clone(&db));
    let skill = SkillUseCases {
        create: Arc::new(CreateSkillService::new(
            skill_repo.clone(),
            Arc::clone(&uploader),
        )),
        update: Arc::new(UpdateSkillService::new(
            skill_query.clone(),
            skill_repo.clone(),
            Arc::clone(&uploader),
        )),
        delete: Arc::new(DeleteSkillService::new(skill_repo)),
        get_list: Arc::new(GetSkillsService::new(skill_query.clone())),
        get_single: Arc::new(GetSingleSkillService::new(skill_query)),
    };

    let education_query = EducationQuerySeaOrm::new(Arc::clone(&db));
    let education_repo = EducationRepositorySeaOrm::new(Arc::clone(&db));
    let education = EducationUseCases {
        create: Arc::new(CreateEducationService::new(education_repo.clone())),
        update: Arc::new(UpdateEducationService::new(education_repo.clone())),
        delete: Arc::new(DeleteEducationService::new(education_repo)),
        get_list: Arc::new(GetEducationService::new(education_query.clone())),
        get_single: Arc::new(GetSingleEducationService::new(education_query)),
    };

    let profile_repo = ProfileRepositorySeaOrm::new(Arc::clone(&db));
    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(profile_repo.clone())),
        ensure: Arc::new(EnsureProfileService::new(profile_repo.clone())),
        update: Arc::new(UpdateProfileService::new(profile_repo, uploader)),
    };

    let contact = ContactUseCases {
        submit: Arc::new(SubmitMessageService::new(MessageRepositorySeaOrm::new(
            Arc::clone(&db),
        ))),
        list: Arc::new(ListMessagesService::new(MessageQuerySeaOrm::new(db))),
    };

    AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        project,
        skill,
        education,
        profile,
        contact,
    }
}

pub fn seed_orchestrator(
    db: Arc<DatabaseConnection>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
) -> SeedOrchestrator {
    SeedOrchestrator::new(
        Arc::new(UserQuerySeaOrm::new(Arc::clone(&db))),
        Arc::new(UserRepositorySeaOrm::new(Arc::clone(&db))),
        password_hasher,
        Arc::new(ProfileRepositorySeaOrm::new(Arc::clone(&db))),
        Arc::new(EducationQuerySeaOrm::new(Arc::clone(&db))),
        Arc::new(EducationRepositorySeaOrm::new(Arc::clone(&db))),
        Arc::new(SkillQuerySeaOrm::new(Arc::clone(&db))),
        Arc::new(SkillRepositorySeaOrm::new(Arc::clone(&db))),
        Arc::new(ProjectQuerySeaOrm::new(Arc::clone(&db))),
        Arc::new(ProjectRepositorySeaOrm::new(db)),
    )
}

/// Shared pieces handed to every actix worker.
#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub token_provider: Arc<dyn TokenProvider + Send + Sync>,
    pub flash: FlashSigner,
    pub pages: PageRenderer,
    pub db: Arc<DatabaseConnection>,
    pub max_body_bytes: usize,
}

impl AppContext {
    pub fn build(
        config: &AppConfig,
        db: Arc<DatabaseConnection>,
        policy: UploadPolicy,
    ) -> Result<Self, tera::Error> {
        let pages = PageRenderer::from_dir(&config.template_dir)?;

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(JwtTokenService::new(JwtConfig::from_app_config(config)));
        let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
            Arc::new(Argon2Hasher::from_env());
        let uploader: Arc<dyn ImageUploader> = Arc::new(ImageUploadService::new(
            LocalImageStore::new(policy.upload_dir.clone()),
            policy,
        ));

        let state = build_state(
            Arc::clone(&db),
            password_hasher,
            Arc::clone(&token_provider),
            uploader,
        );

        Ok(Self {
            state,
            token_provider,
            flash: FlashSigner::new(&config.secret_key),
            pages,
            db,
            max_body_bytes: config.max_body_bytes,
        })
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.state.clone()))
            .app_data(web::Data::new(Arc::clone(&self.token_provider)))
            .app_data(web::Data::new(self.flash.clone()))
            .app_data(web::Data::new(self.pages.clone()))
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::PayloadConfig::new(self.max_body_bytes))
            .app_data(custom_form_config().limit(self.max_body_bytes));

        init_routes(cfg);
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public pages
    cfg.service(crate::site::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::projects_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::contact_page_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_message_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_page_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Admin
    cfg.service(crate::site::adapter::incoming::web::routes::dashboard_handler);
    // Project
    cfg.service(crate::project::adapter::incoming::web::routes::new_project_page_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::edit_project_page_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Skill
    cfg.service(crate::skill::adapter::incoming::web::routes::new_skill_page_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::edit_skill_page_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Education
    cfg.service(crate::education::adapter::incoming::web::routes::new_education_page_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::edit_education_page_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::delete_education_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::edit_profile_page_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
}

//! mockall doubles for the outgoing ports, shared by service and orchestrator tests.
use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::domain::entities::{AdminUser, UserId};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessageData,
};
use crate::education::application::domain::entities::Education;
use crate::education::application::ports::outgoing::{
    EducationData, EducationQuery, EducationQueryError, EducationRepository,
    EducationRepositoryError,
};
use crate::media::application::domain::entities::ImageUpload;
use crate::media::application::ports::incoming::use_cases::{ImageUploadError, ImageUploader};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::{
    NewProfileData, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectQuery, ProjectQueryError, ProjectRepository,
    ProjectRepositoryError, UpdateProjectData,
};
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillQuery, SkillQueryError, SkillRepository, SkillRepositoryError,
    UpdateSkillData,
};

// ============================================================================
// Auth
// ============================================================================

mock! {
    pub UserQuery {}

    #[async_trait]
    impl UserQuery for UserQuery {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<AdminUser>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, UserQueryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn create_user(&self, username: &str, password_hash: &str) -> Result<AdminUser, UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasher {}

    #[async_trait]
    impl PasswordHasher for PasswordHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

// ============================================================================
// Media
// ============================================================================

mock! {
    pub Uploader {}

    #[async_trait]
    impl ImageUploader for Uploader {
        async fn store(&self, upload: Option<ImageUpload>) -> Result<Option<String>, ImageUploadError>;
    }
}

// ============================================================================
// Content
// ============================================================================

mock! {
    pub ProjectQuery {}

    #[async_trait]
    impl ProjectQuery for ProjectQuery {
        async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError>;
        async fn get_by_id(&self, id: i32) -> Result<Option<Project>, ProjectQueryError>;
        async fn has_any(&self) -> Result<bool, ProjectQueryError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn create_project(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;
        async fn create_projects(&self, data: Vec<CreateProjectData>) -> Result<u64, ProjectRepositoryError>;
        async fn update_project(&self, id: i32, data: UpdateProjectData) -> Result<Project, ProjectRepositoryError>;
        async fn delete_project(&self, id: i32) -> Result<(), ProjectRepositoryError>;
    }
}

mock! {
    pub SkillQuery {}

    #[async_trait]
    impl SkillQuery for SkillQuery {
        async fn list_skills(&self) -> Result<Vec<Skill>, SkillQueryError>;
        async fn get_by_id(&self, id: i32) -> Result<Option<Skill>, SkillQueryError>;
        async fn has_any(&self) -> Result<bool, SkillQueryError>;
    }
}

mock! {
    pub SkillRepo {}

    #[async_trait]
    impl SkillRepository for SkillRepo {
        async fn create_skill(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError>;
        async fn create_skills(&self, data: Vec<CreateSkillData>) -> Result<u64, SkillRepositoryError>;
        async fn update_skill(&self, id: i32, data: UpdateSkillData) -> Result<Skill, SkillRepositoryError>;
        async fn delete_skill(&self, id: i32) -> Result<(), SkillRepositoryError>;
    }
}

mock! {
    pub EducationQuery {}

    #[async_trait]
    impl EducationQuery for EducationQuery {
        async fn list_education(&self) -> Result<Vec<Education>, EducationQueryError>;
        async fn get_by_id(&self, id: i32) -> Result<Option<Education>, EducationQueryError>;
        async fn has_any(&self) -> Result<bool, EducationQueryError>;
    }
}

mock! {
    pub EducationRepo {}

    #[async_trait]
    impl EducationRepository for EducationRepo {
        async fn create_education(&self, data: EducationData) -> Result<Education, EducationRepositoryError>;
        async fn update_education(&self, id: i32, data: EducationData) -> Result<Education, EducationRepositoryError>;
        async fn delete_education(&self, id: i32) -> Result<(), EducationRepositoryError>;
    }
}

mock! {
    pub ProfileRepo {}

    #[async_trait]
    impl ProfileRepository for ProfileRepo {
        async fn get_profile(&self) -> Result<Option<Profile>, ProfileRepositoryError>;
        async fn create_profile(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError>;
        async fn update_profile(&self, data: UpdateProfileData) -> Result<Profile, ProfileRepositoryError>;
    }
}

mock! {
    pub MessageRepo {}

    #[async_trait]
    impl MessageRepository for MessageRepo {
        async fn create_message(&self, data: NewMessageData) -> Result<Message, MessageRepositoryError>;
    }
}

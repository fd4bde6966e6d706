use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase, SubmitMessageCommand, SubmitMessageError,
    SubmitMessageUseCase,
};
use crate::education::application::domain::entities::Education;
use crate::education::application::ports::incoming::use_cases::{
    CreateEducationError, CreateEducationUseCase, DeleteEducationError, DeleteEducationUseCase,
    GetEducationError, GetEducationUseCase, GetSingleEducationError, GetSingleEducationUseCase,
    UpdateEducationError, UpdateEducationUseCase,
};
use crate::education::application::ports::outgoing::{EducationData, EducationQueryError};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    EnsureProfileError, EnsureProfileUseCase, GetProfileError, GetProfileUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillError, CreateSkillUseCase, DeleteSkillError,
    DeleteSkillUseCase, GetSingleSkillError, GetSingleSkillUseCase, GetSkillsError,
    GetSkillsUseCase, UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase,
};
use crate::tests::support::fixtures::sample_profile;

// ============================================================================
// Auth
// ============================================================================

/// Rejects every login attempt.
#[derive(Clone, Default)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

// ============================================================================
// Project
// ============================================================================

#[derive(Clone)]
pub struct StubCreateProject {
    pub result: Result<Project, CreateProjectError>,
}

impl StubCreateProject {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateProjectError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateProjectUseCase for StubCreateProject {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateProject {
    pub result: Result<Project, UpdateProjectError>,
}

impl StubUpdateProject {
    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn error(err: UpdateProjectError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProject {
    async fn execute(
        &self,
        _id: i32,
        _command: UpdateProjectCommand,
    ) -> Result<Project, UpdateProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteProject {
    pub result: Result<(), DeleteProjectError>,
}

impl StubDeleteProject {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteProjectError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProject {
    async fn execute(&self, _id: i32) -> Result<(), DeleteProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjects {
    pub result: Result<Vec<Project>, GetProjectsError>,
}

impl StubGetProjects {
    pub fn returning(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjects {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleProject {
    pub result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProject {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProject {
    async fn execute(&self, _id: i32) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}

// ============================================================================
// Skill
// ============================================================================

#[derive(Clone)]
pub struct StubCreateSkill {
    pub result: Result<Skill, CreateSkillError>,
}

impl StubCreateSkill {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateSkillError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateSkillUseCase for StubCreateSkill {
    async fn execute(&self, _command: CreateSkillCommand) -> Result<Skill, CreateSkillError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateSkill {
    pub result: Result<Skill, UpdateSkillError>,
}

impl StubUpdateSkill {
    pub fn success(skill: Skill) -> Self {
        Self { result: Ok(skill) }
    }

    pub fn error(err: UpdateSkillError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkill {
    async fn execute(&self, _id: i32, _command: UpdateSkillCommand) -> Result<Skill, UpdateSkillError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteSkill {
    pub result: Result<(), DeleteSkillError>,
}

impl StubDeleteSkill {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteSkillError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkill {
    async fn execute(&self, _id: i32) -> Result<(), DeleteSkillError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSkills {
    pub result: Result<Vec<Skill>, GetSkillsError>,
}

impl StubGetSkills {
    pub fn returning(skills: Vec<Skill>) -> Self {
        Self { result: Ok(skills) }
    }
}

#[async_trait]
impl GetSkillsUseCase for StubGetSkills {
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleSkill {
    pub result: Result<Skill, GetSingleSkillError>,
}

impl StubGetSingleSkill {
    pub fn found(skill: Skill) -> Self {
        Self { result: Ok(skill) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleSkillError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleSkillUseCase for StubGetSingleSkill {
    async fn execute(&self, _id: i32) -> Result<Skill, GetSingleSkillError> {
        self.result.clone()
    }
}

// ============================================================================
// Education
// ============================================================================

#[derive(Clone)]
pub struct StubCreateEducation {
    pub result: Result<Education, CreateEducationError>,
}

impl StubCreateEducation {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateEducationError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateEducationUseCase for StubCreateEducation {
    async fn execute(&self, _data: EducationData) -> Result<Education, CreateEducationError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateEducation {
    pub result: Result<Education, UpdateEducationError>,
}

impl StubUpdateEducation {
    pub fn success(education: Education) -> Self {
        Self {
            result: Ok(education),
        }
    }

    pub fn error(err: UpdateEducationError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateEducationUseCase for StubUpdateEducation {
    async fn execute(
        &self,
        _id: i32,
        _data: EducationData,
    ) -> Result<Education, UpdateEducationError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteEducation {
    pub result: Result<(), DeleteEducationError>,
}

impl StubDeleteEducation {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteEducationError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteEducationUseCase for StubDeleteEducation {
    async fn execute(&self, _id: i32) -> Result<(), DeleteEducationError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetEducation {
    pub result: Result<Vec<Education>, GetEducationError>,
}

impl StubGetEducation {
    pub fn returning(entries: Vec<Education>) -> Self {
        Self {
            result: Ok(entries),
        }
    }

    pub fn failing(err: EducationQueryError) -> Self {
        Self {
            result: Err(err.into()),
        }
    }
}

#[async_trait]
impl GetEducationUseCase for StubGetEducation {
    async fn execute(&self) -> Result<Vec<Education>, GetEducationError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleEducation {
    pub result: Result<Education, GetSingleEducationError>,
}

impl StubGetSingleEducation {
    pub fn found(education: Education) -> Self {
        Self {
            result: Ok(education),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleEducationError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleEducationUseCase for StubGetSingleEducation {
    async fn execute(&self, _id: i32) -> Result<Education, GetSingleEducationError> {
        self.result.clone()
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct StubGetProfile {
    pub result: Result<Option<Profile>, GetProfileError>,
}

impl StubGetProfile {
    pub fn returning(profile: Option<Profile>) -> Self {
        Self {
            result: Ok(profile),
        }
    }
}

#[async_trait]
impl GetProfileUseCase for StubGetProfile {
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubEnsureProfile {
    pub result: Result<Profile, EnsureProfileError>,
}

impl StubEnsureProfile {
    pub fn found(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }
}

#[async_trait]
impl EnsureProfileUseCase for StubEnsureProfile {
    async fn execute(&self) -> Result<Profile, EnsureProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateProfile {
    pub result: Result<Profile, UpdateProfileError>,
}

impl StubUpdateProfile {
    pub fn success(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn error(err: UpdateProfileError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubUpdateProfile {
    fn default() -> Self {
        Self::success(sample_profile())
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfile {
    async fn execute(&self, _command: UpdateProfileCommand) -> Result<Profile, UpdateProfileError> {
        self.result.clone()
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Accepts every submission and keeps a copy for assertions.
#[derive(Clone, Default)]
pub struct RecordingSubmitMessage {
    seen: Arc<Mutex<Vec<SubmitMessageCommand>>>,
}

impl RecordingSubmitMessage {
    pub fn seen(&self) -> Vec<SubmitMessageCommand> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitMessageUseCase for RecordingSubmitMessage {
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError> {
        let mut seen = self.seen.lock().unwrap();
        seen.push(command.clone());
        Ok(Message {
            id: seen.len() as i32,
            name: command.name,
            email: command.email,
            message: command.message,
            date_posted: Utc::now(),
        })
    }
}

#[derive(Clone)]
pub struct StubListMessages {
    pub result: Result<Vec<Message>, ListMessagesError>,
}

impl StubListMessages {
    pub fn returning(messages: Vec<Message>) -> Self {
        Self {
            result: Ok(messages),
        }
    }
}

#[async_trait]
impl ListMessagesUseCase for StubListMessages {
    async fn execute(&self) -> Result<Vec<Message>, ListMessagesError> {
        self.result.clone()
    }
}

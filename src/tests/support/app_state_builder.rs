use std::sync::Arc;

use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitMessageUseCase,
};
use crate::education::application::education_use_cases::EducationUseCases;
use crate::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, GetEducationUseCase,
    GetSingleEducationUseCase, UpdateEducationError, UpdateEducationUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    EnsureProfileUseCase, GetProfileUseCase, UpdateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSingleSkillUseCase, GetSkillsUseCase,
    UpdateSkillError, UpdateSkillUseCase,
};
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::fixtures::sample_profile;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a harmless stub unless replaced.
///
/// Defaults: empty lists, unknown ids are not found, no profile row for the
/// layout, `ensure` yields the sample profile, and logins are rejected.
pub struct TestAppStateBuilder {
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    project: ProjectUseCases,
    skill: SkillUseCases,
    education: EducationUseCases,
    profile: ProfileUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_user: Arc::new(StubLoginUserUseCase),
            project: ProjectUseCases {
                create: Arc::new(StubCreateProject::repo_error("not used in this test")),
                update: Arc::new(StubUpdateProject::error(UpdateProjectError::NotFound)),
                delete: Arc::new(StubDeleteProject::success()),
                get_list: Arc::new(StubGetProjects::returning(vec![])),
                get_single: Arc::new(StubGetSingleProject::not_found()),
            },
            skill: SkillUseCases {
                create: Arc::new(StubCreateSkill::repo_error("not used in this test")),
                update: Arc::new(StubUpdateSkill::error(UpdateSkillError::NotFound)),
                delete: Arc::new(StubDeleteSkill::success()),
                get_list: Arc::new(StubGetSkills::returning(vec![])),
                get_single: Arc::new(StubGetSingleSkill::not_found()),
            },
            education: EducationUseCases {
                create: Arc::new(StubCreateEducation::repo_error("not used in this test")),
                update: Arc::new(StubUpdateEducation::error(UpdateEducationError::NotFound)),
                delete: Arc::new(StubDeleteEducation::success()),
                get_list: Arc::new(StubGetEducation::returning(vec![])),
                get_single: Arc::new(StubGetSingleEducation::not_found()),
            },
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfile::returning(None)),
                ensure: Arc::new(StubEnsureProfile::found(sample_profile())),
                update: Arc::new(StubUpdateProfile::default()),
            },
            contact: ContactUseCases {
                submit: Arc::new(RecordingSubmitMessage::default()),
                list: Arc::new(StubListMessages::returning(vec![])),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    // Project

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    // Skill

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.update = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_skill(
        mut self,
        uc: impl GetSingleSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.get_single = Arc::new(uc);
        self
    }

    // Education

    pub fn with_create_education(
        mut self,
        uc: impl CreateEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.education.create = Arc::new(uc);
        self
    }

    pub fn with_update_education(
        mut self,
        uc: impl UpdateEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.education.update = Arc::new(uc);
        self
    }

    pub fn with_delete_education(
        mut self,
        uc: impl DeleteEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.education.delete = Arc::new(uc);
        self
    }

    pub fn with_get_education(
        mut self,
        uc: impl GetEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.education.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_education(
        mut self,
        uc: impl GetSingleEducationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.education.get_single = Arc::new(uc);
        self
    }

    // Profile

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_ensure_profile(
        mut self,
        uc: impl EnsureProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.ensure = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    // Contact

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            login_user_use_case: self.login_user,
            project: self.project,
            skill: self.skill,
            education: self.education,
            profile: self.profile,
            contact: self.contact,
        }
    }
}

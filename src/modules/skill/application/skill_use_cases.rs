use std::sync::Arc;

use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSingleSkillUseCase, GetSkillsUseCase,
    UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
}

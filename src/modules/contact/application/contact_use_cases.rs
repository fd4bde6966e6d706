use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
}

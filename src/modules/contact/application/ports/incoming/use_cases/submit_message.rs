use async_trait::async_trait;

use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::outgoing::MessageRepositoryError;

/// Contact form fields, taken as submitted. No format checks on `email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessageCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("repository error: {0}")]
    RepositoryError(#[from] MessageRepositoryError),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError>;
}

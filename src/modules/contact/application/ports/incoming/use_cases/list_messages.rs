use async_trait::async_trait;

use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListMessagesError {
    #[error("query error: {0}")]
    QueryError(#[from] MessageQueryError),
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Message>, ListMessagesError>;
}

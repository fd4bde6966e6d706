use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::contact::application::domain::entities::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessageData {
    pub name: String,
    pub email: String,
    pub message: String,
    pub date_posted: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, data: NewMessageData) -> Result<Message, MessageRepositoryError>;
}

use async_trait::async_trait;

use crate::contact::application::domain::entities::Message;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// Ordered by `date_posted` descending, ties broken by id descending.
    async fn list_newest_first(&self) -> Result<Vec<Message>, MessageQueryError>;
}

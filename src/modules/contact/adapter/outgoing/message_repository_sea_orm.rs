use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};
use std::sync::Arc;

use crate::contact::adapter::outgoing::sea_orm_entity::messages::ActiveModel;
use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessageData,
};

#[derive(Clone)]
pub struct MessageRepositorySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositorySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositorySeaOrm {
    async fn create_message(&self, data: NewMessageData) -> Result<Message, MessageRepositoryError> {
        let row = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            email: Set(data.email),
            message: Set(data.message),
            date_posted: Set(data.date_posted.fixed_offset()),
        };

        let inserted = row
            .insert(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::sea_orm_entity::messages::Model;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_message_returns_row() {
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![Model {
                id: 1,
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                message: "Hi".to_string(),
                date_posted: now.fixed_offset(),
            }]])
            .into_connection();

        let repo = MessageRepositorySeaOrm::new(Arc::new(db));
        let message = repo
            .create_message(NewMessageData {
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                message: "Hi".to_string(),
                date_posted: now,
            })
            .await
            .unwrap();

        assert_eq!(message.email, "a@x.com");
        assert_eq!(message.date_posted, now);
    }
}

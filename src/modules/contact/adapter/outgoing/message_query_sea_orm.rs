use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::contact::adapter::outgoing::sea_orm_entity::messages::{Column, Entity};
use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::outgoing::{MessageQuery, MessageQueryError};

#[derive(Clone)]
pub struct MessageQuerySeaOrm {
    db: Arc<DatabaseConnection>,
}

impl MessageQuerySeaOrm {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageQuery for MessageQuerySeaOrm {
    async fn list_newest_first(&self) -> Result<Vec<Message>, MessageQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::DatePosted)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}

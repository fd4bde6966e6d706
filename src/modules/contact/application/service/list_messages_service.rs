use async_trait::async_trait;

use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase,
};
use crate::contact::application::ports::outgoing::MessageQuery;

pub struct ListMessagesService<Q>
where
    Q: MessageQuery,
{
    message_query: Q,
}

impl<Q> ListMessagesService<Q>
where
    Q: MessageQuery,
{
    pub fn new(message_query: Q) -> Self {
        Self { message_query }
    }
}

#[async_trait]
impl<Q> ListMessagesUseCase for ListMessagesService<Q>
where
    Q: MessageQuery,
{
    async fn execute(&self) -> Result<Vec<Message>, ListMessagesError> {
        Ok(self.message_query.list_newest_first().await?)
    }
}

use async_trait::async_trait;
use chrono::Utc;

use crate::contact::application::domain::entities::Message;
use crate::contact::application::ports::incoming::use_cases::{
    SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase,
};
use crate::contact::application::ports::outgoing::{MessageRepository, NewMessageData};

pub struct SubmitMessageService<R>
where
    R: MessageRepository,
{
    message_repository: R,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(message_repository: R) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository,
{
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError> {
        let message = self
            .message_repository
            .create_message(NewMessageData {
                name: command.name,
                email: command.email,
                message: command.message,
                date_posted: Utc::now(),
            })
            .await?;

        Ok(message)
    }
}

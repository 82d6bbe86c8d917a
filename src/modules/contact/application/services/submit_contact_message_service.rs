use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::contact::application::domain::ContactReceipt;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactSender;

#[derive(Debug, Clone)]
pub struct SubmitContactMessageService<S>
where
    S: ContactSender,
{
    sender: S,
}

impl<S> SubmitContactMessageService<S>
where
    S: ContactSender,
{
    pub fn new(sender: S) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S> SubmitContactMessageUseCase for SubmitContactMessageService<S>
where
    S: ContactSender + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactReceipt, SubmitContactMessageError> {
        let message = command.into_message();

        match self.sender.send(&message).await {
            Ok(()) => {
                info!(has_subject = message.subject.is_some(), "Contact message delivered");
                Ok(ContactReceipt::sent())
            }
            Err(e) => {
                error!("Failed to deliver contact message: {}", e);
                Err(SubmitContactMessageError::DeliveryFailed(e.to_string()))
            }
        }
    }
}

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::contact::application::domain::{ContactMessage, ContactReceipt};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactMessageCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must not exceed {MAX_NAME_LENGTH} characters")]
    NameTooLong,

    #[error("Email address is invalid")]
    InvalidEmail,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message must not exceed {MAX_MESSAGE_LENGTH} characters")]
    MessageTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactMessageCommand {
    message: ContactMessage,
}

impl SubmitContactMessageCommand {
    /// Trims every field; a blank subject becomes `None`.
    pub fn new(
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<Self, SubmitContactMessageCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubmitContactMessageCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(SubmitContactMessageCommandError::NameTooLong);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(SubmitContactMessageCommandError::InvalidEmail);
        }

        let body = message.trim();
        if body.is_empty() {
            return Err(SubmitContactMessageCommandError::EmptyMessage);
        }
        if body.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(SubmitContactMessageCommandError::MessageTooLong);
        }

        let subject = subject
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            message: ContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                subject,
                message: body.to_string(),
            },
        })
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn into_message(self) -> ContactMessage {
        self.message
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Failed to deliver contact message: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactReceipt, SubmitContactMessageError>;
}

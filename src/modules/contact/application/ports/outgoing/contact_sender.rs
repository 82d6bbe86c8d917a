use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactSendError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Delivers contact messages to the portfolio owner.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactSendError>;
}

#[async_trait]
impl<T> ContactSender for Arc<T>
where
    T: ContactSender + ?Sized,
{
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactSendError> {
        (**self).send(message).await
    }
}

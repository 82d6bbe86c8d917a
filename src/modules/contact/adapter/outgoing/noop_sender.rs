use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{ContactSendError, ContactSender};

/// Accepts every message without delivering it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopContactSender;

#[async_trait]
impl ContactSender for NoopContactSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactSendError> {
        info!(
            chars = message.message.chars().count(),
            "Contact message accepted without delivery"
        );
        Ok(())
    }
}

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{ContactSendError, ContactSender};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Forwards contact messages to the portfolio owner's inbox.
///
/// The visitor's address goes into `Reply-To`; `From` stays the configured
/// sender so relays do not reject the message as spoofed.
pub struct SmtpContactSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
    to_email: String,
}

impl SmtpContactSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, to_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            to_email: to_email.to_string(),
        }
    }

    pub fn new_relay(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        to_email: &str,
    ) -> Result<Self, ContactSendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| ContactSendError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(
            Box::new(transport),
            from_email,
            to_email,
        ))
    }

    /// Plain SMTP without TLS or auth (Mailpit, MailHog).
    pub fn new_local(host: &str, port: u16, from_email: &str, to_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email, to_email)
    }

    fn build(&self, message: &ContactMessage) -> Result<Message, ContactSendError> {
        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e| ContactSendError::InvalidAddress(format!("from: {e}")))?;
        let to: Mailbox = self
            .to_email
            .parse()
            .map_err(|e| ContactSendError::InvalidAddress(format!("to: {e}")))?;
        let visitor: Address = message
            .email
            .parse()
            .map_err(|e| ContactSendError::InvalidAddress(format!("reply-to: {e}")))?;

        let body = format!(
            "From: {} <{}>\n\n{}\n",
            message.name, message.email, message.message
        );

        Message::builder()
            .from(from)
            .reply_to(Mailbox::new(Some(message.name.clone()), visitor))
            .to(to)
            .subject(message.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| ContactSendError::Build(e.to_string()))
    }
}

#[async_trait]
impl ContactSender for SmtpContactSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactSendError> {
        let email = self.build(message)?;
        self.mailer
            .send(email)
            .await
            .map_err(ContactSendError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            let raw = String::from_utf8_lossy(&email.formatted()).into_owned();
            self.sent.lock().unwrap().push(raw);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            panic!("mailer must not be reached when the message cannot be built");
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Rina".to_string(),
            email: "rina@example.com".to_string(),
            subject: Some("Collaboration".to_string()),
            message: "Let's build something".to_string(),
        }
    }

    #[tokio::test]
    async fn sends_to_owner_with_visitor_as_reply_to() {
        let mailer = RecordingMailer::default();
        let sender = SmtpContactSender::new_with_mailer(
            Box::new(mailer.clone()),
            "portfolio@example.com",
            "owner@example.com",
        );

        sender.send(&message()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let raw = &sent[0];
        assert!(raw.contains("From: portfolio@example.com"), "{raw}");
        assert!(raw.contains("To: owner@example.com"), "{raw}");
        assert!(raw.contains("Reply-To:"), "{raw}");
        assert!(raw.contains("rina@example.com"), "{raw}");
        assert!(raw.contains("Subject: Collaboration"), "{raw}");
        assert!(raw.contains("Let's build something"), "{raw}");
    }

    #[tokio::test]
    async fn missing_subject_uses_sender_name() {
        let mailer = RecordingMailer::default();
        let sender = SmtpContactSender::new_with_mailer(
            Box::new(mailer.clone()),
            "portfolio@example.com",
            "owner@example.com",
        );

        let mut msg = message();
        msg.subject = None;
        sender.send(&msg).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert!(sent[0].contains("Subject: Portfolio contact from Rina"));
    }

    #[tokio::test]
    async fn invalid_from_address_fails_before_sending() {
        let sender = SmtpContactSender::new_with_mailer(
            Box::new(UnreachableMailer),
            "invalid-from-email",
            "owner@example.com",
        );

        let err = sender.send(&message()).await.unwrap_err();
        assert!(matches!(err, ContactSendError::InvalidAddress(_)), "{err:?}");
    }

    #[tokio::test]
    async fn invalid_owner_address_fails_before_sending() {
        let sender = SmtpContactSender::new_with_mailer(
            Box::new(UnreachableMailer),
            "portfolio@example.com",
            "not-an-email",
        );

        let err = sender.send(&message()).await.unwrap_err();
        assert!(matches!(err, ContactSendError::InvalidAddress(_)), "{err:?}");
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let sender = SmtpContactSender::new_with_mailer(
            Box::new(FailingMailer),
            "portfolio@example.com",
            "owner@example.com",
        );

        let err = sender.send(&message()).await.unwrap_err();
        assert_eq!(
            err,
            ContactSendError::Transport("connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn local_transport_to_closed_port_fails() {
        let sender =
            SmtpContactSender::new_local("127.0.0.1", 9, "portfolio@example.com", "owner@example.com");

        let err = sender.send(&message()).await.unwrap_err();
        assert!(matches!(err, ContactSendError::Transport(_)), "{err:?}");
    }
}

mod noop_sender;
mod smtp_sender;

pub use noop_sender::NoopContactSender;
pub use smtp_sender::{Mailer, SmtpContactSender};

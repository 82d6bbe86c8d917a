mod entities;

pub use entities::{ContactMessage, ContactReceipt, SENT_VIA_EMAIL};

mod submit_contact_message;

pub use submit_contact_message::{submit_contact_message_handler, __path_submit_contact_message_handler, ContactMessageRequest};

mod submit_contact_message;

pub use submit_contact_message::{
    SubmitContactMessageCommand, SubmitContactMessageCommandError, SubmitContactMessageError,
    SubmitContactMessageUseCase, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
};

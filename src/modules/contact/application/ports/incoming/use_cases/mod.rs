mod delete_contact_message;
mod get_contact_messages;
mod send_contact_message;

pub use delete_contact_message::{DeleteContactMessageError, DeleteContactMessageUseCase};
pub use get_contact_messages::{
    GetContactMessageError, GetContactMessageUseCase, GetContactMessagesUseCase,
};
pub use send_contact_message::{SendContactMessageError, SendContactMessageUseCase};

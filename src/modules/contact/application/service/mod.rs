pub mod delete_contact_message_service;
pub mod get_contact_messages_service;
pub mod send_contact_message_service;

pub use delete_contact_message_service::DeleteContactMessageService;
pub use get_contact_messages_service::{GetContactMessageService, GetContactMessagesService};
pub use send_contact_message_service::SendContactMessageService;

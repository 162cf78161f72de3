pub mod entities;
pub mod policies;

pub use entities::{ContactMessage, NewContactMessage};

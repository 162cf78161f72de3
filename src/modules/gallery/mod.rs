pub mod project_card;
pub mod project_popup;

pub use project_card::ProjectCard;
pub use project_popup::{PopupKey, PopupState, ProjectPopup};

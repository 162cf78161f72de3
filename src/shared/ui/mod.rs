pub mod format;
pub mod notification;

pub use format::{document_type_label, format_file_size, truncate_text};
pub use notification::{Notice, NoticeKind};

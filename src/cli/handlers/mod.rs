pub mod auth;
pub mod chat;
pub mod cv;
pub mod dashboard;
pub mod messages;
pub mod profile;
pub mod projects;

use std::path::Path;

use crate::shared::media::FileUpload;
use crate::shared::ui::{Notice, NoticeKind};

/// Handlers finish with a notice either way; `Err` only short-circuits.
pub type HandlerResult = Result<Notice, Notice>;

pub fn settle(result: HandlerResult) -> Notice {
    match result {
        Ok(notice) | Err(notice) => notice,
    }
}

/// Errors and warnings go to stderr, everything else to stdout.
pub fn report(notice: &Notice) {
    match notice.kind {
        NoticeKind::Error | NoticeKind::Warning => eprintln!("{notice}"),
        NoticeKind::Success | NoticeKind::Info => println!("{notice}"),
    }
}

pub(crate) async fn read_upload(path: &Path) -> Result<FileUpload, Notice> {
    FileUpload::from_path(path).await.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Cannot read upload");
        Notice::error(format!("Cannot read {}: {e}", path.display()))
    })
}

pub(crate) fn id_label(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

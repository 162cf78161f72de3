use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::timestamp;
use crate::shared::ui::{document_type_label, format_file_size};

/// Metadata of an uploaded CV. The content itself is fetched from the
/// download endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CvFile {
    pub id: Option<i64>,
    pub filename: String,
    pub content_type: Option<String>,
    pub size: Option<u64>,
    #[serde(deserialize_with = "timestamp::deserialize_optional")]
    pub upload_date: Option<DateTime<Utc>>,
}

impl CvFile {
    pub fn type_label(&self) -> String {
        document_type_label(self.content_type.as_deref())
    }

    pub fn size_label(&self) -> String {
        self.size
            .map(format_file_size)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Which stored CV a download refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvTarget {
    Current,
    Id(i64),
    Filename(String),
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::timestamp;

/// A message left through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Display only; set by the backend.
    #[serde(deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactMessage {
    pub fn received_label(&self) -> String {
        self.created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.email.trim(), self.message.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_reads_created_at() {
        let msg: ContactMessage = serde_json::from_str(
            r#"{"id":1,"name":"Ada","email":"ada@example.com","message":"Hello","createdAt":"2024-05-01T10:30:00"}"#,
        )
        .unwrap();
        assert_eq!(msg.received_label(), "2024-05-01 10:30");
    }

    #[test]
    fn test_message_without_timestamp() {
        let msg: ContactMessage = serde_json::from_str(r#"{"id":1,"name":"Ada"}"#).unwrap();
        assert_eq!(msg.received_label(), "-");
        assert_eq!(msg.message, "");
    }
}

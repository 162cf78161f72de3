// src/shared/media/upload_policy.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::shared::media::FileUpload;

const MIB: u64 = 1024 * 1024;

static ANY_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^image/").expect("static regex"));
static PHOTO_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^image/(jpg|jpeg|png|gif)$").expect("static regex"));

#[derive(Debug, Clone)]
pub enum MimeRule {
    AllowList(&'static [&'static str]),
    Pattern(&'static LazyLock<Regex>),
}

impl MimeRule {
    fn accepts(&self, content_type: &str) -> bool {
        let content_type = content_type.trim().to_ascii_lowercase();
        match self {
            MimeRule::AllowList(allowed) => allowed.contains(&content_type.as_str()),
            MimeRule::Pattern(pattern) => pattern.is_match(&content_type),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("{file_name} is not an accepted format (accepted: {accepted})")]
    UnsupportedType {
        file_name: String,
        content_type: String,
        accepted: &'static str,
    },

    #[error("{file_name} exceeds the maximum size of {max_mb}MB")]
    TooLarge {
        file_name: String,
        size: u64,
        max_mb: u64,
    },

    #[error("{file_name} is empty")]
    Empty { file_name: String },
}

/// Client-side guard applied to a file before any request is built.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub mime_rule: MimeRule,
    /// Human readable list of accepted formats, used in rejection messages.
    pub accepted_label: &'static str,
}

impl UploadPolicy {
    pub const CV_MIME_TYPES: &'static [&'static str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "image/jpeg",
        "image/png",
    ];

    /// Project screenshots: any image type, 5MB.
    pub fn project_image() -> Self {
        Self {
            max_file_size_bytes: 5 * MIB,
            mime_rule: MimeRule::Pattern(&ANY_IMAGE),
            accepted_label: "images",
        }
    }

    /// Profile photo: JPG, PNG or GIF, 5MB.
    pub fn profile_photo() -> Self {
        Self {
            max_file_size_bytes: 5 * MIB,
            mime_rule: MimeRule::Pattern(&PHOTO_IMAGE),
            accepted_label: "JPG, PNG, GIF",
        }
    }

    /// CV document: PDF, DOC, DOCX, JPG or PNG, 10MB.
    pub fn cv_file() -> Self {
        Self {
            max_file_size_bytes: 10 * MIB,
            mime_rule: MimeRule::AllowList(Self::CV_MIME_TYPES),
            accepted_label: "PDF, DOC, DOCX, JPG, PNG",
        }
    }

    pub fn validate(&self, file: &FileUpload) -> Result<(), UploadRejection> {
        if !self.mime_rule.accepts(&file.content_type) {
            return Err(UploadRejection::UnsupportedType {
                file_name: file.file_name.clone(),
                content_type: file.content_type.clone(),
                accepted: self.accepted_label,
            });
        }

        if file.size() == 0 {
            return Err(UploadRejection::Empty {
                file_name: file.file_name.clone(),
            });
        }

        if file.size() > self.max_file_size_bytes {
            return Err(UploadRejection::TooLarge {
                file_name: file.file_name.clone(),
                size: file.size(),
                max_mb: self.max_file_size_bytes / MIB,
            });
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::media::FileUpload;

/// The portfolio owner's profile. The backend keeps a list, but only the
/// first entry is ever shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    /// Absolute URL or a filename served from `/profiles/photo/:filename`.
    pub photo_url: Option<String>,
}

impl Profile {
    pub fn has_photo(&self) -> bool {
        self.photo_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Edited profile fields plus an optional new photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub photo: Option<FileUpload>,
}

impl ProfileSubmission {
    /// Prefills the form from a stored profile. No photo is attached.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            photo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_reads_camel_case_and_tolerates_missing_fields() {
        let profile: Profile =
            serde_json::from_str(r#"{"id":1,"fullName":"Ada Lovelace","photoUrl":"ada.png"}"#)
                .unwrap();

        assert_eq!(profile.full_name, "Ada Lovelace");
        assert_eq!(profile.bio, "");
        assert!(profile.has_photo());
    }

    #[test]
    fn test_blank_photo_url_is_no_photo() {
        let profile = Profile {
            photo_url: Some("  ".to_string()),
            ..Profile::default()
        };
        assert!(!profile.has_photo());
    }
}

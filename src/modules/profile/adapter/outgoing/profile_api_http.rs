use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::outgoing::{ProfileApi, ProfileFields};
use crate::shared::http::{ApiClient, ApiError, MultipartPayload};
use crate::shared::media::FileUpload;

const PROFILES: &str = "profiles";

/// `fullName`, `bio`, `title` and the `photo` part.
pub fn profile_multipart(fields: ProfileFields, photo: FileUpload) -> MultipartPayload {
    MultipartPayload::new()
        .text("fullName", fields.full_name)
        .text("bio", fields.bio)
        .text("title", fields.title)
        .file("photo", photo)
}

#[derive(Clone)]
pub struct ProfileApiHttp {
    client: ApiClient,
}

impl ProfileApiHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileApi for ProfileApiHttp {
    async fn list(&self) -> Result<Vec<Profile>, ApiError> {
        let profiles: Option<Vec<Profile>> = self.client.get_json(&[PROFILES]).await?;
        Ok(profiles.unwrap_or_default())
    }

    async fn get_by_id(&self, id: i64) -> Result<Profile, ApiError> {
        self.client.get_json(&[PROFILES, &id.to_string()]).await
    }

    async fn create(&self, fields: ProfileFields, photo: FileUpload) -> Result<Profile, ApiError> {
        self.client
            .post_multipart(&[PROFILES], profile_multipart(fields, photo))
            .await
    }

    async fn update_with_photo(
        &self,
        id: i64,
        fields: ProfileFields,
        photo: FileUpload,
    ) -> Result<Profile, ApiError> {
        self.client
            .put_multipart(&[PROFILES, &id.to_string()], profile_multipart(fields, photo))
            .await
    }

    async fn update(&self, id: i64, profile: Profile) -> Result<Profile, ApiError> {
        self.client
            .put_json(&[PROFILES, &id.to_string()], &profile)
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&[PROFILES, &id.to_string()]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_multipart_field_names() {
        let form = profile_multipart(
            ProfileFields {
                full_name: "Ada Lovelace".to_string(),
                title: "Engineer".to_string(),
                bio: "Writes programs for engines".to_string(),
            },
            FileUpload::new("me.jpg", "image/jpeg", vec![1]),
        );

        assert_eq!(form.field("fullName"), Some("Ada Lovelace"));
        assert_eq!(form.field("title"), Some("Engineer"));
        assert_eq!(form.file_names_under("photo"), vec!["me.jpg"]);
    }

    #[test]
    fn test_json_update_body_carries_photo_url() {
        let profile = Profile {
            id: Some(1),
            full_name: "Ada".to_string(),
            title: "Engineer".to_string(),
            bio: "Writes programs".to_string(),
            photo_url: Some("ada.png".to_string()),
        };
        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["photoUrl"], "ada.png");
        assert_eq!(body["fullName"], "Ada");
    }
}

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::cv::domain::entities::CvFile;
use crate::shared::http::{ApiClient, ApiError, MultipartPayload};
use crate::shared::media::FileUpload;

const CV_FILES: &str = "cvfiles";

/// `/cvfiles/exists` answers either a bare boolean or `{"exists": bool}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExistsResponse {
    Flag(bool),
    Object { exists: bool },
}

impl From<ExistsResponse> for bool {
    fn from(response: ExistsResponse) -> Self {
        match response {
            ExistsResponse::Flag(flag) | ExistsResponse::Object { exists: flag } => flag,
        }
    }
}

#[derive(Clone)]
pub struct CvFileApiHttp {
    client: ApiClient,
}

impl CvFileApiHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CvFileApi for CvFileApiHttp {
    async fn current(&self) -> Result<CvFile, ApiError> {
        self.client.get_json(&[CV_FILES, "current"]).await
    }

    async fn list(&self) -> Result<Vec<CvFile>, ApiError> {
        let files: Option<Vec<CvFile>> = self.client.get_json(&[CV_FILES, "all"]).await?;
        Ok(files.unwrap_or_default())
    }

    async fn get_by_id(&self, id: i64) -> Result<CvFile, ApiError> {
        self.client.get_json(&[CV_FILES, &id.to_string()]).await
    }

    async fn upload(&self, file: FileUpload) -> Result<CvFile, ApiError> {
        let form = MultipartPayload::new().file("file", file);
        self.client.post_multipart(&[CV_FILES], form).await
    }

    async fn download_current(&self) -> Result<Vec<u8>, ApiError> {
        self.client.get_bytes(&[CV_FILES, "download"]).await
    }

    async fn download_by_filename(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_bytes(&[CV_FILES, "download", filename])
            .await
    }

    async fn delete_current(&self) -> Result<(), ApiError> {
        self.client.delete(&[CV_FILES]).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&[CV_FILES, &id.to_string()]).await
    }

    async fn exists(&self) -> Result<bool, ApiError> {
        let response: ExistsResponse = self.client.get_json(&[CV_FILES, "exists"]).await?;
        Ok(response.into())
    }
}

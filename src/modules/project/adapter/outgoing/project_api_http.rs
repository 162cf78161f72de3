use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::modules::project::application::domain::{Project, ProjectImage, Technologies};
use crate::modules::project::application::ports::outgoing::{ProjectApi, ProjectPayload};
use crate::shared::http::{ApiClient, ApiError, MultipartPayload};
use crate::shared::media::FileUpload;

const PROJECTS: &str = "projects";

// ============================================================================
// Wire format
// ============================================================================

/// A project as the backend returns it. Every field is optional so that
/// partially filled records still load.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawProject {
    id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    technologies: Technologies,
    images: Option<Vec<RawImage>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawImage {
    Url(String),
    Object {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default, rename = "imageUrl")]
        image_url: Option<String>,
    },
}

impl From<RawImage> for ProjectImage {
    fn from(raw: RawImage) -> Self {
        match raw {
            RawImage::Url(url) => ProjectImage::new(None, url),
            RawImage::Object { id, image_url } => ProjectImage::new(id, image_url.unwrap_or_default()),
        }
    }
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Project {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            technologies: raw.technologies,
            images: raw
                .images
                .unwrap_or_default()
                .into_iter()
                .map(ProjectImage::from)
                .collect(),
        }
    }
}

/// Accepts a list, a single object or anything else (empty list).
fn normalize_list(body: Value) -> Vec<Project> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(_) => vec![body],
        other => {
            tracing::warn!(kind = %json_kind(&other), "Unexpected project list payload");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawProject>(item) {
            Ok(raw) => Some(Project::from(raw)),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable project record");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Multipart body shared by create and update: the text fields, the kept
/// images as JSON under `existingImages` (only when there are any), and one
/// `images` part per new file.
pub fn project_multipart(
    payload: &ProjectPayload,
    files: Vec<FileUpload>,
) -> Result<MultipartPayload, ApiError> {
    let mut form = MultipartPayload::new()
        .text("title", payload.title.as_str())
        .text("description", payload.description.as_str())
        .text("technologies", payload.technologies.to_wire());

    if !payload.existing_images.is_empty() {
        form = form.text(
            "existingImages",
            serde_json::to_string(&payload.existing_images)?,
        );
    }

    Ok(form.files_under("images", files))
}

// ============================================================================
// Adapter
// ============================================================================

#[derive(Clone)]
pub struct ProjectApiHttp {
    client: ApiClient,
}

impl ProjectApiHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectApi for ProjectApiHttp {
    async fn list(&self) -> Result<Vec<Project>, ApiError> {
        let body: Value = self.client.get_json(&[PROJECTS]).await?;
        Ok(normalize_list(body))
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, ApiError> {
        let raw: RawProject = self.client.get_json(&[PROJECTS, &id.to_string()]).await?;
        Ok(raw.into())
    }

    async fn create(
        &self,
        data: ProjectPayload,
        images: Vec<FileUpload>,
    ) -> Result<Project, ApiError> {
        let form = project_multipart(&data, images)?;
        let raw: RawProject = self.client.post_multipart(&[PROJECTS], form).await?;
        Ok(raw.into())
    }

    async fn update(
        &self,
        id: i64,
        data: ProjectPayload,
        new_images: Vec<FileUpload>,
    ) -> Result<Project, ApiError> {
        let form = project_multipart(&data, new_images)?;
        let raw: RawProject = self
            .client
            .put_multipart(&[PROJECTS, &id.to_string()], form)
            .await?;
        Ok(raw.into())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&[PROJECTS, &id.to_string()]).await
    }
}

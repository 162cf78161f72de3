// src/modules/project/application/project_form.rs
use uuid::Uuid;

use crate::modules::project::application::domain::policies::project_rules::validate_submission;
use crate::modules::project::application::domain::{
    Project, ProjectImage, ProjectSubmission, Technologies,
};
use crate::shared::media::{FileUpload, UploadPolicy, UploadRejection};
use crate::shared::ui::Notice;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// A file attached in the form but not sent yet. `key` only identifies it
/// inside this form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub key: Uuid,
    pub file: FileUpload,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AttachError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("{0} is already attached")]
    Duplicate(String),
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A save is already in progress")]
    AlreadySubmitting,

    #[error("Please fix the form: {0}")]
    Invalid(ValidationErrors),
}

/// Editor state behind the project create/edit form.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    mode: FormMode,
    pub title: String,
    pub description: String,
    /// Raw text as typed, e.g. `Rust, Actix`.
    pub technologies: String,
    existing_images: Vec<ProjectImage>,
    pending_images: Vec<PendingImage>,
    is_submitting: bool,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            technologies: String::new(),
            existing_images: Vec::new(),
            pending_images: Vec::new(),
            is_submitting: false,
        }
    }

    /// Loads a stored project for editing. A project without an id can only
    /// be created.
    pub fn for_project(project: &Project) -> Self {
        Self {
            mode: project.id.map_or(FormMode::Create, FormMode::Edit),
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.to_wire(),
            existing_images: project.images.clone(),
            pending_images: Vec::new(),
            is_submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn existing_images(&self) -> &[ProjectImage] {
        &self.existing_images
    }

    pub fn pending_images(&self) -> &[PendingImage] {
        &self.pending_images
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn image_count(&self) -> usize {
        self.existing_images.len() + self.pending_images.len()
    }

    /// Attaches one file. Non-images, files over 5MB and files already
    /// attached (same name and size) are refused.
    pub fn attach(&mut self, file: FileUpload) -> Result<Uuid, AttachError> {
        UploadPolicy::project_image().validate(&file)?;

        if self.is_duplicate(&file) {
            return Err(AttachError::Duplicate(file.file_name));
        }

        let key = Uuid::new_v4();
        tracing::debug!(file = %file.file_name, %key, "Image attached");
        self.pending_images.push(PendingImage { key, file });
        Ok(key)
    }

    /// Attaches every file it can and returns one notice per refused file.
    pub fn attach_all(&mut self, files: impl IntoIterator<Item = FileUpload>) -> Vec<Notice> {
        files
            .into_iter()
            .filter_map(|file| self.attach(file).err())
            .map(|e| match e {
                AttachError::Duplicate(_) => Notice::warning(e.to_string()),
                AttachError::Rejected(_) => Notice::error(e.to_string()),
            })
            .collect()
    }

    pub fn remove_pending(&mut self, index: usize) -> Option<PendingImage> {
        (index < self.pending_images.len()).then(|| self.pending_images.remove(index))
    }

    pub fn remove_pending_by_key(&mut self, key: Uuid) -> Option<PendingImage> {
        let index = self.pending_images.iter().position(|p| p.key == key)?;
        Some(self.pending_images.remove(index))
    }

    pub fn remove_existing(&mut self, index: usize) -> Option<ProjectImage> {
        (index < self.existing_images.len()).then(|| self.existing_images.remove(index))
    }

    pub fn submission(&self) -> ProjectSubmission {
        ProjectSubmission {
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: Technologies::parse(&self.technologies),
            kept_images: self.existing_images.clone(),
            new_images: self
                .pending_images
                .iter()
                .map(|p| p.file.clone())
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_submission(&self.submission())
    }

    /// Marks the form as submitting and hands out the submission. Refused
    /// while a previous save is still in flight.
    pub fn begin_submit(&mut self) -> Result<ProjectSubmission, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        let submission = self.submission();
        validate_submission(&submission).map_err(SubmitError::Invalid)?;

        self.is_submitting = true;
        Ok(submission)
    }

    /// Clears the in-flight flag. After a successful save the stored
    /// project becomes the new baseline and pending files are dropped.
    pub fn finish_submit(&mut self, saved: Option<&Project>) {
        self.is_submitting = false;
        if let Some(project) = saved {
            *self = Self::for_project(project);
        }
    }

    fn is_duplicate(&self, file: &FileUpload) -> bool {
        self.pending_images
            .iter()
            .any(|p| p.file.file_name == file.file_name && p.file.size() == file.size())
    }
}

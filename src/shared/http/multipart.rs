// src/shared/http/multipart.rs
use reqwest::multipart::{Form, Part};

use crate::shared::http::ApiError;
use crate::shared::media::FileUpload;

/// Text fields and file parts of a multipart request, in insertion order.
///
/// Kept as plain data until the request is sent so services can be tested
/// without a live HTTP stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    fields: Vec<(String, String)>,
    files: Vec<(String, FileUpload)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn files_under(mut self, name: &str, files: impl IntoIterator<Item = FileUpload>) -> Self {
        for file in files {
            self.files.push((name.to_string(), file));
        }
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[(String, FileUpload)] {
        &self.files
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn file_names_under(&self, name: &str) -> Vec<&str> {
        self.files
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, file)| file.file_name.as_str())
            .collect()
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, file) in self.files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}

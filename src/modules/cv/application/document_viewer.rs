// src/modules/cv/application/document_viewer.rs
use crate::modules::cv::domain::entities::CvFile;

/// A downloaded document held for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub cv: CvFile,
    pub bytes: Vec<u8>,
}

impl OpenDocument {
    pub fn title(&self) -> String {
        format!("{} ({})", self.cv.filename, self.cv.type_label())
    }
}

/// Owns the bytes of at most one document. Closing it, or opening another,
/// drops the previous content.
#[derive(Debug, Default)]
pub struct DocumentViewer {
    open: Option<OpenDocument>,
}

impl DocumentViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, cv: CvFile, bytes: Vec<u8>) -> &OpenDocument {
        if let Some(previous) = self.open.take() {
            tracing::debug!(filename = %previous.cv.filename, "Releasing previous document");
        }
        self.open.insert(OpenDocument { cv, bytes })
    }

    /// Returns whether a document was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenDocument> {
        self.open.as_ref()
    }

    pub fn held_bytes(&self) -> usize {
        self.open.as_ref().map_or(0, |doc| doc.bytes.len())
    }
}

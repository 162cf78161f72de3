// src/modules/gallery/project_popup.rs
use crate::modules::project::application::domain::Project;
use crate::shared::media::MediaUrls;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Closed,
    Open { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl PopupKey {
    /// Maps DOM-style key names (`"Escape"`, `"ArrowLeft"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => PopupKey::Escape,
            "ArrowLeft" | "Left" => PopupKey::ArrowLeft,
            "ArrowRight" | "Right" => PopupKey::ArrowRight,
            _ => PopupKey::Other,
        }
    }
}

/// Detail popup with an image carousel for one project.
#[derive(Debug, Clone)]
pub struct ProjectPopup {
    project: Option<Project>,
    state: PopupState,
}

impl Default for ProjectPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectPopup {
    pub fn new() -> Self {
        Self {
            project: None,
            state: PopupState::Closed,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PopupState::Open { .. })
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Opening always starts at the first image.
    pub fn open(&mut self, project: Project) {
        self.project = Some(project);
        self.state = PopupState::Open { index: 0 };
    }

    pub fn close(&mut self) {
        self.project = None;
        self.state = PopupState::Closed;
    }

    pub fn image_count(&self) -> usize {
        self.project.as_ref().map_or(0, Project::image_count)
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            PopupState::Open { index } => Some(index),
            PopupState::Closed => None,
        }
    }

    pub fn next(&mut self) {
        self.step(|index, count| (index + 1) % count);
    }

    pub fn prev(&mut self) {
        self.step(|index, count| (index + count - 1) % count);
    }

    pub fn go_to(&mut self, index: usize) {
        if let PopupState::Open { .. } = self.state {
            if index < self.image_count() {
                self.state = PopupState::Open { index };
            }
        }
    }

    /// Returns whether the key did something.
    pub fn handle_key(&mut self, key: PopupKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            PopupKey::Escape => self.close(),
            PopupKey::ArrowLeft => self.prev(),
            PopupKey::ArrowRight => self.next(),
            PopupKey::Other => return false,
        }
        true
    }

    /// The image to show, or the placeholder when the project has none.
    pub fn current_image_url(&self, urls: &MediaUrls) -> Option<String> {
        let index = self.index()?;
        let reference = self
            .project
            .as_ref()
            .and_then(|p| p.images.get(index))
            .map(|image| image.image_url.as_str())
            .unwrap_or_default();
        Some(urls.project_image_or_placeholder(reference))
    }

    /// `"2 / 5"`, or `None` when there is nothing to page through.
    pub fn counter_label(&self) -> Option<String> {
        let index = self.index()?;
        let count = self.image_count();
        (count > 1).then(|| format!("{} / {}", index + 1, count))
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let count = self.image_count();
        if let PopupState::Open { index } = self.state {
            let index = if count == 0 { 0 } else { advance(index, count) };
            self.state = PopupState::Open { index };
        }
    }
}

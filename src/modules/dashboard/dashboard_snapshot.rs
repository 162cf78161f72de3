// src/modules/dashboard/dashboard_snapshot.rs
use std::fmt;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::cv::domain::entities::CvFile;
use crate::modules::profile::application::domain::Profile;
use crate::modules::project::application::domain::Project;

/// How many projects and messages the "recent" panels show.
pub const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Projects,
    Messages,
    Profile,
    Cv,
}

impl fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DashboardSection::Projects => "projects",
            DashboardSection::Messages => "messages",
            DashboardSection::Profile => "profile",
            DashboardSection::Cv => "CV",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_images: usize,
    pub message_count: usize,
    pub has_profile: bool,
    pub has_cv: bool,
}

/// Everything the dashboard loaded. Counts are derived on demand, so local
/// removals are reflected immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub projects: Vec<Project>,
    pub messages: Vec<ContactMessage>,
    pub profile: Option<Profile>,
    pub current_cv: Option<CvFile>,
    /// Sections that failed to load and show their empty state.
    pub degraded: Vec<DashboardSection>,
}

impl DashboardSnapshot {
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_projects: self.projects.len(),
            total_images: self.projects.iter().map(Project::image_count).sum(),
            message_count: self.messages.len(),
            has_profile: self.profile.is_some(),
            has_cv: self.current_cv.is_some(),
        }
    }

    pub fn recent_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(RECENT_LIMIT)]
    }

    pub fn recent_messages(&self) -> &[ContactMessage] {
        &self.messages[..self.messages.len().min(RECENT_LIMIT)]
    }

    /// Distinct technologies of the recent projects, in first-seen order.
    pub fn recent_technologies(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tech in self
            .recent_projects()
            .iter()
            .flat_map(|p| p.technologies.iter())
        {
            if !seen.contains(tech) {
                seen.push(tech.clone());
            }
        }
        seen
    }

    pub fn is_degraded(&self, section: DashboardSection) -> bool {
        self.degraded.contains(&section)
    }

    /// Drops the project with `project_id`. Returns whether one was removed.
    pub fn remove_project(&mut self, project_id: i64) -> bool {
        match self.projects.iter().position(|p| p.id == Some(project_id)) {
            Some(index) => {
                self.projects.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_message(&mut self, message_id: i64) -> bool {
        match self.messages.iter().position(|m| m.id == Some(message_id)) {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn replace_cv(&mut self, cv: CvFile) {
        self.current_cv = Some(cv);
    }

    pub fn clear_cv(&mut self) {
        self.current_cv = None;
    }
}

// src/modules/dashboard/dashboard_service.rs
use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::GetContactMessagesUseCase;
use crate::modules::cv::application::use_cases::get_current_cv::IGetCurrentCvUseCase;
use crate::modules::dashboard::dashboard_snapshot::{DashboardSection, DashboardSnapshot};
use crate::modules::profile::application::ports::incoming::use_cases::LoadCurrentProfileUseCase;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;

/// Loads the admin overview: projects, then messages, then the profile,
/// then the current CV. Each step waits for the previous one. A failing
/// step leaves its section empty and the rest still loads.
#[derive(Clone)]
pub struct DashboardService {
    projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    messages: Arc<dyn GetContactMessagesUseCase + Send + Sync>,
    profile: Arc<dyn LoadCurrentProfileUseCase + Send + Sync>,
    cv: Arc<dyn IGetCurrentCvUseCase + Send + Sync>,
}

impl DashboardService {
    pub fn new(
        projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
        messages: Arc<dyn GetContactMessagesUseCase + Send + Sync>,
        profile: Arc<dyn LoadCurrentProfileUseCase + Send + Sync>,
        cv: Arc<dyn IGetCurrentCvUseCase + Send + Sync>,
    ) -> Self {
        Self {
            projects,
            messages,
            profile,
            cv,
        }
    }

    pub async fn load(&self) -> DashboardSnapshot {
        let mut snapshot = DashboardSnapshot::default();

        match self.projects.execute().await {
            Ok(projects) => snapshot.projects = projects,
            Err(e) => degrade(&mut snapshot, DashboardSection::Projects, &e),
        }

        match self.messages.execute().await {
            Ok(messages) => snapshot.messages = messages,
            Err(e) => degrade(&mut snapshot, DashboardSection::Messages, &e),
        }

        match self.profile.execute().await {
            Ok(profile) => snapshot.profile = profile,
            Err(e) => degrade(&mut snapshot, DashboardSection::Profile, &e),
        }

        match self.cv.execute().await {
            Ok(cv) => snapshot.current_cv = cv,
            Err(e) => degrade(&mut snapshot, DashboardSection::Cv, &e),
        }

        let stats = snapshot.stats();
        tracing::info!(
            projects = stats.total_projects,
            images = stats.total_images,
            messages = stats.message_count,
            has_profile = stats.has_profile,
            has_cv = stats.has_cv,
            degraded = snapshot.degraded.len(),
            "Dashboard loaded"
        );
        snapshot
    }
}

fn degrade(snapshot: &mut DashboardSnapshot, section: DashboardSection, err: &dyn std::error::Error) {
    tracing::warn!(%section, error = %err, "Dashboard section failed to load");
    snapshot.degraded.push(section);
}

use chrono::{TimeZone, Utc};

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::cv::domain::entities::CvFile;
use crate::modules::profile::application::domain::Profile;
use crate::modules::project::application::domain::{Project, ProjectImage, Technologies};

/// A saved project with one stored image.
pub fn sample_project(id: i64) -> Project {
    Project {
        id: Some(id),
        title: format!("Project {id}"),
        description: format!("Description of project number {id}"),
        technologies: Technologies::parse("Rust, Actix"),
        images: vec![ProjectImage::new(Some(id * 10), format!("project-{id}.png"))],
    }
}

pub fn sample_profile(id: i64) -> Profile {
    Profile {
        id: Some(id),
        full_name: "Grace Hopper".to_string(),
        title: "Software Engineer".to_string(),
        bio: "Builds compilers and backend services".to_string(),
        photo_url: Some(format!("profile-{id}.jpg")),
    }
}

pub fn sample_cv(id: i64, filename: &str) -> CvFile {
    CvFile {
        id: Some(id),
        filename: filename.to_string(),
        content_type: Some("application/pdf".to_string()),
        size: Some(2048),
        upload_date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).single(),
    }
}

pub fn sample_message(id: i64) -> ContactMessage {
    ContactMessage {
        id: Some(id),
        name: format!("Visitor {id}"),
        email: format!("visitor{id}@example.com"),
        message: "I would like to talk about a project".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, id as u32 % 28 + 1, 9, 30, 0).single(),
    }
}

use crate::modules::project::application::domain::Project;
use crate::shared::media::MediaUrls;
use crate::shared::ui::truncate_text;

/// Length of the description excerpt shown on a gallery card.
pub const EXCERPT_CHARS: usize = 100;

/// What one gallery tile shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: Option<i64>,
    pub title: String,
    pub excerpt: String,
    pub technologies: Vec<String>,
    pub cover_url: String,
    pub image_count: usize,
}

impl ProjectCard {
    pub fn from_project(project: &Project, urls: &MediaUrls) -> Self {
        let cover = project
            .first_image()
            .map(|image| image.image_url.as_str())
            .unwrap_or_default();

        Self {
            id: project.id,
            title: project.title.clone(),
            excerpt: truncate_text(&project.description, EXCERPT_CHARS),
            technologies: project.technologies.as_slice().to_vec(),
            cover_url: urls.project_image_or_placeholder(cover),
            image_count: project.image_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::{ProjectImage, Technologies};
    use crate::shared::media::media_urls::IMAGE_PLACEHOLDER;

    #[test]
    fn test_card_uses_first_image_or_placeholder() {
        let urls = MediaUrls::parse("http://localhost:9000/api").unwrap();
        let mut project = Project {
            id: Some(1),
            title: "Site".to_string(),
            description: "x".repeat(150),
            technologies: Technologies::parse("Rust, Actix"),
            images: vec![ProjectImage::new(None, "https://cdn.example.com/a.png")],
        };

        let card = ProjectCard::from_project(&project, &urls);
        assert_eq!(card.cover_url, "https://cdn.example.com/a.png");
        assert_eq!(card.excerpt.chars().count(), EXCERPT_CHARS + 3);

        project.images.clear();
        let card = ProjectCard::from_project(&project, &urls);
        assert_eq!(card.cover_url, IMAGE_PLACEHOLDER);
    }
}

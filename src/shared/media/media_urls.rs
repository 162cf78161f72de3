// src/shared/media/media_urls.rs
use reqwest::Url;

use crate::shared::http::api_client::endpoint_url;

/// Inline grey tile shown when a project has no image or an image fails to load.
pub const IMAGE_PLACEHOLDER: &str = "data:image/svg+xml;utf8,<svg width='300' height='300' xmlns='http://www.w3.org/2000/svg'><rect width='300' height='300' fill='%23e0e0e0'/><text x='50%25' y='50%25' font-family='Arial' font-size='18' fill='%23999999' text-anchor='middle' dy='.3em'>Image unavailable</text></svg>";

/// Inline avatar shown when the profile has no photo.
pub const AVATAR_PLACEHOLDER: &str = "data:image/svg+xml;utf8,<svg width='100' height='100' xmlns='http://www.w3.org/2000/svg'><rect width='100' height='100' fill='%233f51b5'/><text x='50%25' y='50%25' font-family='Arial' font-size='48' fill='%23ffffff' text-anchor='middle' dy='.3em'>P</text></svg>";

/// Resolves stored image/photo/document references into fetchable URLs.
///
/// References are either absolute `http(s)` URLs, returned untouched, or
/// bare filenames served by the backend's static endpoints.
#[derive(Debug, Clone)]
pub struct MediaUrls {
    base_url: Url,
}

impl MediaUrls {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn parse(base_url: &str) -> Option<Self> {
        Url::parse(base_url).ok().map(Self::new)
    }

    /// `None` for an empty reference.
    pub fn project_image(&self, reference: &str) -> Option<String> {
        self.resolve(reference, &["projects", "images"])
    }

    pub fn project_image_or_placeholder(&self, reference: &str) -> String {
        self.project_image(reference)
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string())
    }

    pub fn profile_photo(&self, reference: &str) -> Option<String> {
        self.resolve(reference, &["profiles", "photo"])
    }

    pub fn profile_photo_or_placeholder(&self, reference: Option<&str>) -> String {
        reference
            .and_then(|r| self.profile_photo(r))
            .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string())
    }

    pub fn cv_download(&self, filename: &str) -> Option<String> {
        self.resolve(filename, &["cvfiles", "download"])
    }

    fn resolve(&self, reference: &str, prefix: &[&str]) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }
        if is_absolute(reference) {
            return Some(reference.to_string());
        }

        let mut segments = prefix.to_vec();
        segments.push(reference);
        endpoint_url(&self.base_url, &segments)
            .ok()
            .map(|url| url.to_string())
    }
}

pub fn is_absolute(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> MediaUrls {
        MediaUrls::parse("http://localhost:9000/api").unwrap()
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            urls().project_image("https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn test_bare_filenames_hit_static_endpoints() {
        let urls = urls();
        assert_eq!(
            urls.project_image("shot 1.png").as_deref(),
            Some("http://localhost:9000/api/projects/images/shot%201.png")
        );
        assert_eq!(
            urls.profile_photo("me.jpg").as_deref(),
            Some("http://localhost:9000/api/profiles/photo/me.jpg")
        );
        assert_eq!(
            urls.cv_download("cv.pdf").as_deref(),
            Some("http://localhost:9000/api/cvfiles/download/cv.pdf")
        );
    }

    #[test]
    fn test_empty_reference_falls_back_to_placeholder() {
        let urls = urls();
        assert_eq!(urls.project_image_or_placeholder(""), IMAGE_PLACEHOLDER);
        assert_eq!(urls.profile_photo_or_placeholder(None), AVATAR_PLACEHOLDER);
    }
}

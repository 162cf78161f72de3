use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::media::FileUpload;

/// An image already stored by the backend: either an absolute URL or a
/// filename served from `/projects/images/:filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub image_url: String,
}

impl ProjectImage {
    pub fn new(id: Option<i64>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            image_url: image_url.into(),
        }
    }
}

/// Technology tags of a project.
///
/// Held as a list everywhere in the crate; the backend stores a single
/// comma-joined string, which is what `Serialize` produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Technologies(Vec<String>);

impl Technologies {
    pub const SEPARATOR: &'static str = ", ";

    pub fn from_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // the wire form is comma-joined, so an entry never holds a comma
        Self(
            items
                .into_iter()
                .flat_map(|s| {
                    s.as_ref()
                        .split(',')
                        .map(|part| part.trim().to_string())
                        .collect::<Vec<_>>()
                })
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Accepts either a JSON array (`["Rust","Tokio"]`) or a comma list
    /// (`Rust, Tokio`). Entries are trimmed and blanks dropped.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('[') {
            if let Ok(list) = serde_json::from_str::<Vec<String>>(trimmed) {
                return Self::from_list(list);
            }
        }
        Self::from_list(trimmed.split(','))
    }

    /// Canonical wire form: entries joined by `", "`.
    pub fn to_wire(&self) -> String {
        self.0.join(Self::SEPARATOR)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Technologies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Technologies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            List(Vec<String>),
        }

        Ok(match Option::<Wire>::deserialize(deserializer)? {
            Some(Wire::Text(raw)) => Technologies::parse(&raw),
            Some(Wire::List(list)) => Technologies::from_list(list),
            None => Technologies::default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub technologies: Technologies,
    pub images: Vec<ProjectImage>,
}

impl Project {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn first_image(&self) -> Option<&ProjectImage> {
        self.images.first()
    }
}

/// Everything a create or update request needs: the edited fields, the
/// stored images the user kept and the newly attached files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub technologies: Technologies,
    pub kept_images: Vec<ProjectImage>,
    pub new_images: Vec<FileUpload>,
}

impl ProjectSubmission {
    pub fn image_count(&self) -> usize {
        self.kept_images.len() + self.new_images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technologies_round_trip_is_canonical() {
        let parsed = Technologies::parse("Angular, NestJS, Kafka");
        assert_eq!(parsed.as_slice(), ["Angular", "NestJS", "Kafka"]);
        assert_eq!(parsed.to_wire(), "Angular, NestJS, Kafka");
        assert_eq!(Technologies::parse(&parsed.to_wire()), parsed);
    }

    #[test]
    fn test_technologies_normalizes_sloppy_input() {
        let parsed = Technologies::parse(" Angular ,NestJS,, Kafka ,");
        assert_eq!(parsed.to_wire(), "Angular, NestJS, Kafka");
    }

    #[test]
    fn test_technologies_accepts_json_array_string() {
        let parsed = Technologies::parse(r#"["Rust", " Tokio "]"#);
        assert_eq!(parsed.as_slice(), ["Rust", "Tokio"]);
    }

    #[test]
    fn test_technologies_list_entry_with_comma_is_split() {
        let parsed = Technologies::parse(r#"["C, C++", "Rust"]"#);
        assert_eq!(parsed.as_slice(), ["C", "C++", "Rust"]);
        assert_eq!(Technologies::parse(&parsed.to_wire()), parsed);

        let from_list = Technologies::from_list(["Spring Boot, Kafka"]);
        assert_eq!(from_list.to_wire(), "Spring Boot, Kafka");
        assert_eq!(from_list.len(), 2);
    }

    #[test]
    fn test_technologies_broken_json_falls_back_to_commas() {
        let parsed = Technologies::parse("[Rust, Tokio");
        assert_eq!(parsed.as_slice(), ["[Rust", "Tokio"]);
    }

    #[test]
    fn test_technologies_serde_accepts_string_list_and_null() {
        let from_text: Technologies = serde_json::from_str(r#""Rust, Actix""#).unwrap();
        let from_list: Technologies = serde_json::from_str(r#"["Rust","Actix"]"#).unwrap();
        let from_null: Technologies = serde_json::from_str("null").unwrap();

        assert_eq!(from_text, from_list);
        assert!(from_null.is_empty());
        assert_eq!(serde_json::to_string(&from_list).unwrap(), r#""Rust, Actix""#);
    }

    #[test]
    fn test_project_image_serializes_camel_case() {
        let json = serde_json::to_string(&ProjectImage::new(Some(4), "a.png")).unwrap();
        assert_eq!(json, r#"{"id":4,"imageUrl":"a.png"}"#);
    }
}

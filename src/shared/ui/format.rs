// src/shared/ui/format.rs

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Human readable size with up to two decimals (`1.5 KB`, `2 MB`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Short label for a document's content type.
pub fn document_type_label(content_type: Option<&str>) -> String {
    let Some(content_type) = content_type.filter(|c| !c.is_empty()) else {
        return "Document".to_string();
    };

    match content_type {
        "application/pdf" => "PDF".to_string(),
        "application/msword" => "DOC".to_string(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            "DOCX".to_string()
        }
        "image/jpeg" => "JPEG".to_string(),
        "image/png" => "PNG".to_string(),
        other => other
            .split('/')
            .nth(1)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_uppercase())
            .unwrap_or_else(|| "Document".to_string()),
    }
}

//! Common display helpers

/// Placeholder for absent values
pub const EMPTY: &str = "--";

/// Show an optional string, or `--`
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => EMPTY.to_string(),
    }
}

/// Dashboard tags come as a space-padded string (`" lte branch "`)
pub fn tags_of(extra: &serde_json::Map<String, serde_json::Value>) -> String {
    or_dash(extra.get("tags").and_then(|tags| tags.as_str()))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(", ")
}

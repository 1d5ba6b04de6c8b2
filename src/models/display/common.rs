//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Placeholder for values the API left empty
pub const PLACEHOLDER: &str = "--";

/// Format timestamp string to ISO datetime (YYYY-MM-DDTHH:MM:SSZ)
pub fn format_as_iso_datetime(timestamp: &str) -> String {
    if let Ok(dt) = timestamp.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    }

    // Offsets other than Z (GitHub Enterprise can be configured this way)
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%SZ").to_string();
    }

    // Return as-is if we can't parse it
    timestamp.to_string()
}

/// Value or [`PLACEHOLDER`] when absent or blank
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

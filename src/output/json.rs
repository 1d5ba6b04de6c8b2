//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output: the rows plus run metadata
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<'a, T: ?Sized> {
    /// The rows being printed
    pub data: &'a T,

    /// Messages the server sent back instead of data
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub errors: &'a [String],

    /// Metadata about the run
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonEnvelope<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            errors: &[],
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside a [`JsonEnvelope`]
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonEnvelope::new(data))
}

/// Format server error messages as a [`JsonEnvelope`] with empty `data`
pub fn format_json_errors(messages: &[String]) -> Result<String, serde_json::Error> {
    let empty: &[serde_json::Value] = &[];
    let envelope = JsonEnvelope {
        errors: messages,
        ..JsonEnvelope::new(empty)
    };
    serde_json::to_string_pretty(&envelope)
}

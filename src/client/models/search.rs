//! Search and error envelope models

use serde::{Deserialize, Serialize};

use super::Repository;

/// Body of `GET /search/repositories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Total number of matches across all pages
    #[serde(default)]
    pub total_count: u64,

    /// Whether GitHub gave up before searching everything
    #[serde(default)]
    pub incomplete_results: bool,

    /// Items on the requested page, in server order
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// Error body GitHub returns with 4xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// One entry of the `errors` array; validation errors may omit `message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Messages to show the user, most specific first.
    ///
    /// Uses `errors[].message` when present, otherwise the top-level
    /// `message`, otherwise nothing.
    pub fn messages(&self) -> Vec<String> {
        let detailed: Vec<String> = self
            .errors
            .iter()
            .filter_map(|e| e.message.clone())
            .collect();

        if !detailed.is_empty() {
            return detailed;
        }

        self.message.iter().cloned().collect()
    }
}

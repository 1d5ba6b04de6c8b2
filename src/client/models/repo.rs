//! Repository models returned by the GitHub REST API

use serde::{Deserialize, Serialize};

/// Repository resource
///
/// Shared by the single-repository endpoint and the items of a repository
/// search. Only `id` is required; everything else falls back to a default so a
/// sparse item still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository ID
    pub id: u64,

    /// Short repository name
    #[serde(default)]
    pub name: String,

    /// `owner/name`
    #[serde(default)]
    pub full_name: String,

    /// Owning account
    #[serde(default)]
    pub owner: Owner,

    /// Primary language, null when GitHub could not detect one
    #[serde(default)]
    pub language: Option<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    /// Fork count as reported by the single-repository endpoint
    #[serde(default)]
    pub forks: u64,

    /// Fork count as reported by search items
    #[serde(default)]
    pub forks_count: u64,

    /// Last update timestamp (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Canonical web URL
    #[serde(default)]
    pub html_url: String,
}

/// Repository owner (user or organization)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
}

//! Repository display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{PLACEHOLDER, format_as_iso_datetime, or_placeholder};
use crate::cli::RepoSort;
use crate::client::Repository;
use crate::output::FixedColumns;

/// Value of the field a search was sorted by, as shown in the first column
pub fn sort_value(repo: &Repository, sort: RepoSort) -> String {
    match sort {
        RepoSort::Stars => repo.stargazers_count.to_string(),
        RepoSort::Forks => repo.forks_count.to_string(),
        RepoSort::Updated => repo
            .updated_at
            .as_deref()
            .map(format_as_iso_datetime)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

/// Full repository description, one row per `describe` success.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    #[tabled(rename = "id")]
    pub id: u64,

    #[tabled(rename = "name")]
    pub name: String,

    /// Owner login
    #[tabled(rename = "owner")]
    pub owner: String,

    /// Primary language or `--`
    #[tabled(rename = "language")]
    pub language: String,

    #[tabled(rename = "stars")]
    pub stars: u64,

    #[tabled(rename = "forks")]
    pub forks: u64,

    #[tabled(rename = "html_url")]
    pub html_url: String,
}

impl FixedColumns for RepoDisplay {
    const WIDTHS: &'static [usize] = &[10, 20, 20, 20, 5, 5];
}

impl From<Repository> for RepoDisplay {
    fn from(repo: Repository) -> Self {
        Self {
            language: or_placeholder(repo.language.as_deref()),
            id: repo.id,
            name: repo.name,
            owner: repo.owner.login,
            stars: repo.stargazers_count,
            forks: repo.forks,
            html_url: repo.html_url,
        }
    }
}

/// Search hit with its sort value and ID, one row per `list` item.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RankedRepoDisplay {
    /// Value of the sort field; header is the sort name
    #[tabled(rename = "sort")]
    pub sort_value: String,

    #[tabled(rename = "full_name")]
    pub full_name: String,

    #[tabled(rename = "id")]
    pub id: u64,
}

impl FixedColumns for RankedRepoDisplay {
    const WIDTHS: &'static [usize] = &[20, 60];
}

impl RankedRepoDisplay {
    pub fn new(repo: &Repository, sort: RepoSort) -> Self {
        Self {
            sort_value: sort_value(repo, sort),
            full_name: repo.full_name.clone(),
            id: repo.id,
        }
    }

    /// Header with the sort name in the first column
    pub fn header(sort: RepoSort) -> Vec<String> {
        vec![
            sort.as_str().to_string(),
            "full_name".to_string(),
            "id".to_string(),
        ]
    }
}

/// Search hit with its sort value, one row per `search` item.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SearchHitDisplay {
    #[tabled(rename = "sort")]
    pub sort_value: String,

    #[tabled(rename = "full_name")]
    pub full_name: String,
}

impl FixedColumns for SearchHitDisplay {
    const WIDTHS: &'static [usize] = &[20];
}

impl SearchHitDisplay {
    pub fn new(repo: &Repository, sort: RepoSort) -> Self {
        Self {
            sort_value: sort_value(repo, sort),
            full_name: repo.full_name.clone(),
        }
    }

    pub fn header(sort: RepoSort) -> Vec<String> {
        vec![sort.as_str().to_string(), "full_name".to_string()]
    }
}

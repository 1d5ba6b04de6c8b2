//! Common CLI types shared across commands

use crate::client::query::SortOrder;

/// Sort direction for search-backed commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortDir {
    /// Ascending order
    Asc,
    /// Descending order
    #[default]
    Desc,
}

impl From<SortDir> for SortOrder {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => SortOrder::Asc,
            SortDir::Desc => SortOrder::Desc,
        }
    }
}

/// Repository field to sort search results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RepoSort {
    /// Star count
    Stars,
    /// Last update time
    Updated,
    /// Fork count
    Forks,
}

impl RepoSort {
    /// Name used both as the API `sort` value and as the column header
    pub fn as_str(self) -> &'static str {
        match self {
            RepoSort::Stars => "stars",
            RepoSort::Updated => "updated",
            RepoSort::Forks => "forks",
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - fixed-width aligned columns (global default)
    #[default]
    Table,
    /// Pretty format - bordered table sized to its content
    Pretty,
    /// JSON format - structured for scripts/APIs
    Json,
}

//! GitHub API data models

pub mod repo;
mod search;

pub use repo::Repository;
pub use search::{ErrorBody, SearchResults};

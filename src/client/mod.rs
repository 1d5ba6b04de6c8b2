//! GitHub API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
pub mod github;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod parallel;
pub mod query;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use models::{Repository, SearchResults};
pub use query::SearchParams;

/// Outcome of a request that reached the server.
///
/// Transport failures never produce an `ApiResponse`; they surface as
/// [`ApiError::Network`](crate::error::ApiError::Network) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// 200 with a body that parsed as `T`
    Ok(T),

    /// 4xx with the messages the server sent back
    ClientError { status: u16, messages: Vec<String> },

    /// Any other status
    Status(u16),
}

/// GitHub API operations used by the CLI
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Run one page of `GET /search/repositories`
    async fn search_repositories(&self, params: &SearchParams)
    -> Result<ApiResponse<SearchResults>>;

    /// Fetch `GET /repositories/{id}`
    async fn get_repository(&self, repo_id: &str) -> Result<ApiResponse<Repository>>;
}

//! GitHub REST API client implementation

use async_trait::async_trait;

use super::http::HttpAdapter;
use super::{ApiResponse, GitHubApi, Repository, SearchParams, SearchResults};
use crate::config::Config;
use crate::error::Result;

/// GitHub REST API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: HttpAdapter,
}

impl GitHubClient {
    /// Create a new client from resolved configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: HttpAdapter::new(config)?,
        })
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn search_repositories(
        &self,
        params: &SearchParams,
    ) -> Result<ApiResponse<SearchResults>> {
        let raw = self
            .http
            .get(&["search", "repositories"], &params.to_query_params())
            .await?;
        raw.into_api_response()
    }

    async fn get_repository(&self, repo_id: &str) -> Result<ApiResponse<Repository>> {
        let raw = self.http.get(&["repositories", repo_id], &[]).await?;
        raw.into_api_response()
    }
}

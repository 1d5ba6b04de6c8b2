//! Mock GitHub API client for testing
//!
//! Provides a mock implementation of [`GitHubApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ApiResponse, GitHubApi, Repository, SearchParams, SearchResults};
use crate::error::{ApiError, Result};

type Reply<T> = std::result::Result<ApiResponse<T>, ApiError>;

/// Mock API client for testing.
///
/// Configure replies via builder methods, then use in tests. Repository IDs
/// with no configured reply answer 404 `Not Found`.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_repo("1", RepositoryBuilder::new(1).build())
///     .await
///     .with_repo_status("2", 404)
///     .await;
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    /// Replies for get_repository keyed by identifier
    repos: Arc<Mutex<HashMap<String, Reply<Repository>>>>,
    /// Reply for search_repositories
    search: Arc<Mutex<Option<Reply<SearchResults>>>>,
    /// Search params received, in call order
    captured_searches: Arc<Mutex<Vec<SearchParams>>>,
    /// Artificial latency applied to every call
    delay: Option<Duration>,
    /// Total calls to get_repository
    repo_calls: AtomicUsize,
    /// Calls currently awaiting their delay
    in_flight: AtomicUsize,
    /// Highest value `in_flight` reached
    max_in_flight: AtomicUsize,
}

impl MockGitHubClient {
    /// Create a new mock client with no configured replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `repo_id` with a 200 and this repository
    pub async fn with_repo(self, repo_id: &str, repo: Repository) -> Self {
        self.repos
            .lock()
            .await
            .insert(repo_id.to_string(), Ok(ApiResponse::Ok(repo)));
        self
    }

    /// Answer `repo_id` with a non-200 status
    pub async fn with_repo_status(self, repo_id: &str, status: u16) -> Self {
        let reply = if (400..500).contains(&status) {
            ApiResponse::ClientError {
                status,
                messages: vec![format!("HTTP {}", status)],
            }
        } else {
            ApiResponse::Status(status)
        };
        self.repos
            .lock()
            .await
            .insert(repo_id.to_string(), Ok(reply));
        self
    }

    /// Fail `repo_id` with an error instead of a response
    pub async fn with_repo_error(self, repo_id: &str, error: ApiError) -> Self {
        self.repos
            .lock()
            .await
            .insert(repo_id.to_string(), Err(error));
        self
    }

    /// Answer searches with 200 and these items, in this order
    pub async fn with_search_items(self, items: Vec<Repository>) -> Self {
        let results = SearchResults {
            total_count: items.len() as u64,
            incomplete_results: false,
            items,
        };
        *self.search.lock().await = Some(Ok(ApiResponse::Ok(results)));
        self
    }

    /// Answer searches with an arbitrary response or error
    pub async fn with_search_reply(self, reply: Reply<SearchResults>) -> Self {
        *self.search.lock().await = Some(reply);
        self
    }

    /// Delay every call by `delay` before replying
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of get_repository calls made
    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls observed in flight at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Search params received so far
    pub async fn captured_searches(&self) -> Vec<SearchParams> {
        self.captured_searches.lock().await.clone()
    }

    async fn simulate_latency(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn search_repositories(
        &self,
        params: &SearchParams,
    ) -> Result<ApiResponse<SearchResults>> {
        self.captured_searches.lock().await.push(params.clone());
        self.simulate_latency().await;

        let reply = self
            .search
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| Ok(ApiResponse::Ok(SearchResults::default())));
        Ok(reply?)
    }

    async fn get_repository(&self, repo_id: &str) -> Result<ApiResponse<Repository>> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        let reply = self.repos.lock().await.get(repo_id).cloned();
        match reply {
            Some(reply) => Ok(reply?),
            None => Ok(ApiResponse::ClientError {
                status: 404,
                messages: vec!["Not Found".to_string()],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::RepositoryBuilder;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_search_is_empty() {
        let mock = MockGitHubClient::new();

        match mock.search_repositories(&SearchParams::new("x")).await.unwrap() {
            ApiResponse::Ok(results) => assert!(results.items.is_empty()),
            other => panic!("Expected Ok, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_client_unknown_repo_is_not_found() {
        let mock = MockGitHubClient::new();

        let response = mock.get_repository("missing").await.unwrap();
        assert!(matches!(
            response,
            ApiResponse::ClientError { status: 404, .. }
        ));
        assert_eq!(mock.repo_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_repo() {
        let mock = MockGitHubClient::new()
            .with_repo("1", RepositoryBuilder::new(1).build())
            .await;

        match mock.get_repository("1").await.unwrap() {
            ApiResponse::Ok(repo) => assert_eq!(repo.id, 1),
            other => panic!("Expected Ok, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockGitHubClient::new()
            .with_repo_error("1", ApiError::Network("refused".to_string()))
            .await;

        let result = mock.get_repository("1").await;
        assert!(matches!(result, Err(Error::Api(ApiError::Network(_)))));
    }

    #[tokio::test]
    async fn test_mock_client_captures_search_params() {
        let mock = MockGitHubClient::new();
        let params = SearchParams::new("language:rust").per_page(3);

        mock.search_repositories(&params).await.unwrap();

        assert_eq!(mock.captured_searches().await, vec![params]);
    }
}

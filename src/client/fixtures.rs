//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

use super::models::Repository;
use super::models::repo::Owner;

/// Builder for creating test Repository instances.
///
/// # Example
/// ```ignore
/// let repo = RepositoryBuilder::new(1)
///     .name("ghtool")
///     .owner("octocat")
///     .stars(42)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryBuilder {
    repo: Repository,
}

impl RepositoryBuilder {
    /// Create a new builder with the given ID and derived defaults.
    pub fn new(id: u64) -> Self {
        let name = format!("repo-{}", id);
        let owner = "octocat".to_string();
        Self {
            repo: Repository {
                id,
                full_name: format!("{}/{}", owner, name),
                html_url: format!("https://github.com/{}/{}", owner, name),
                name,
                owner: Owner { login: owner },
                language: Some("Rust".to_string()),
                description: None,
                stargazers_count: 0,
                forks: 0,
                forks_count: 0,
                updated_at: Some("2024-01-15T12:00:00Z".to_string()),
            },
        }
    }

    /// Set the repository name (updates full name and URL).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.repo.name = name.into();
        self.refresh_derived();
        self
    }

    /// Set the owner login (updates full name and URL).
    pub fn owner(mut self, login: impl Into<String>) -> Self {
        self.repo.owner.login = login.into();
        self.refresh_derived();
        self
    }

    /// Set or clear the primary language.
    pub fn language(mut self, language: Option<&str>) -> Self {
        self.repo.language = language.map(str::to_string);
        self
    }

    /// Set the star count.
    pub fn stars(mut self, count: u64) -> Self {
        self.repo.stargazers_count = count;
        self
    }

    /// Set both fork counters.
    pub fn forks(mut self, count: u64) -> Self {
        self.repo.forks = count;
        self.repo.forks_count = count;
        self
    }

    /// Set the last-updated timestamp.
    pub fn updated_at(mut self, ts: impl Into<String>) -> Self {
        self.repo.updated_at = Some(ts.into());
        self
    }

    /// Build the Repository.
    pub fn build(self) -> Repository {
        self.repo
    }

    fn refresh_derived(&mut self) {
        self.repo.full_name = format!("{}/{}", self.repo.owner.login, self.repo.name);
        self.repo.html_url = format!("https://github.com/{}", self.repo.full_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let repo = RepositoryBuilder::new(7).build();
        assert_eq!(repo.id, 7);
        assert_eq!(repo.full_name, "octocat/repo-7");
        assert_eq!(repo.html_url, "https://github.com/octocat/repo-7");
    }

    #[test]
    fn test_builder_keeps_derived_fields_in_sync() {
        let repo = RepositoryBuilder::new(1).owner("rust-lang").name("cargo").build();
        assert_eq!(repo.full_name, "rust-lang/cargo");
        assert_eq!(repo.html_url, "https://github.com/rust-lang/cargo");
    }
}

//! Command execution context
//!
//! Bundles what a network command needs: the resolved configuration, a
//! ready API client and the output format.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Resolved configuration
    pub config: Config,
    /// API client bound to `config.api_url`
    pub client: GitHubClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context from global options.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = opts.config()?;
        let client = GitHubClient::new(&config)?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}

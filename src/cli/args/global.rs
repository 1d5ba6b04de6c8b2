//! Global CLI options shared across all commands
//!
//! These flags are declared `global`, so they are accepted before or after
//! the subcommand name.

use clap::{ArgMatches, Args, FromArgMatches};

use crate::config::Config;
use crate::error::Result;

use super::OutputFormat;

/// Global CLI options passed to all command handlers.
///
/// Every option is a plain flag with a built-in default; nothing is read
/// from the environment.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// Output format (table, pretty, json)
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Override the GitHub API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Extract the global options from top-level matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self::from_arg_matches(matches)?)
    }

    /// Resolve and validate runtime configuration.
    pub fn config(&self) -> Result<Config> {
        Config::resolve(self.api_url.as_deref(), self.timeout)
    }
}

//! `describe`: concurrent lookup of repositories by ID
//!
//! Every identifier gets its own `GET /repositories/{id}`, all in flight at
//! once. The command waits for all of them, then prints one row per
//! repository that came back 200. Anything else is dropped from the table;
//! a single failing identifier never takes its siblings down with it.

use clap::Args;
use colored::Colorize;
use log::{debug, info, warn};

use crate::cli::{CommandContext, OutputFormat};
use crate::client::parallel::{Completed, fan_out};
use crate::client::{ApiResponse, GitHubApi, Repository};
use crate::error::{ApiError, Error, Result};
use crate::models::RepoDisplay;
use crate::output::{Formattable, Listing};

/// Arguments for `ghtool describe`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DescribeArgs {
    /// Repository IDs to describe
    #[arg(value_name = "REPO_ID", num_args = 0..)]
    pub repo_ids: Vec<String>,
}

/// What happened to one identifier
#[derive(Debug, Clone, PartialEq)]
pub enum RepoOutcome {
    /// 200 with a parseable body
    Found(Repository),

    /// The server answered with something other than 200
    HttpError { status: u16, messages: Vec<String> },

    /// 200 whose body was not a repository
    Malformed(String),

    /// No response at all (connect, DNS, TLS, timeout)
    Transport(String),
}

impl From<Result<ApiResponse<Repository>>> for RepoOutcome {
    fn from(result: Result<ApiResponse<Repository>>) -> Self {
        match result {
            Ok(ApiResponse::Ok(repo)) => RepoOutcome::Found(repo),
            Ok(ApiResponse::ClientError { status, messages }) => {
                RepoOutcome::HttpError { status, messages }
            }
            Ok(ApiResponse::Status(status)) => RepoOutcome::HttpError {
                status,
                messages: Vec::new(),
            },
            Err(Error::Api(ApiError::InvalidResponse(reason))) => RepoOutcome::Malformed(reason),
            Err(Error::Api(ApiError::Network(reason))) => RepoOutcome::Transport(reason),
            Err(other) => RepoOutcome::Transport(other.to_string()),
        }
    }
}

/// Look up every identifier concurrently and wait for all of them.
///
/// Returns exactly one outcome per identifier, ordered by position in
/// `repo_ids`. Transport failures are reported on stderr as they happen.
pub async fn collect<C: GitHubApi + ?Sized>(
    client: &C,
    repo_ids: &[String],
) -> Vec<Completed<String, RepoOutcome>> {
    let mut outcomes = fan_out(repo_ids.to_vec(), move |repo_id| async move {
        let outcome = RepoOutcome::from(client.get_repository(&repo_id).await);
        if let RepoOutcome::Transport(reason) = &outcome {
            eprintln!("{} {}: {}", "Error:".red().bold(), repo_id, reason);
        }
        outcome
    })
    .await;

    outcomes.sort_by_key(|done| done.index);
    outcomes
}

/// Format the successful outcomes; everything else is dropped.
pub fn render(outcomes: Vec<Completed<String, RepoOutcome>>, format: OutputFormat) -> Result<String> {
    let mut rows = Vec::with_capacity(outcomes.len());

    for done in outcomes {
        match done.value {
            RepoOutcome::Found(repo) => rows.push(RepoDisplay::from(repo)),
            RepoOutcome::HttpError { status, messages } => {
                info!(
                    "Skipping {}: HTTP {} {}",
                    done.key,
                    status,
                    messages.join("; ")
                );
            }
            RepoOutcome::Malformed(reason) => {
                warn!("Skipping {}: {}", done.key, reason);
            }
            // Already reported by collect
            RepoOutcome::Transport(_) => {}
        }
    }

    debug!("Rendering {} repositories", rows.len());
    Listing::new(rows).format(format)
}

/// Run the describe command for a non-empty identifier list
pub async fn run(ctx: &CommandContext, args: &DescribeArgs) -> Result<()> {
    debug!(
        "Describing {} repositories from {}",
        args.repo_ids.len(),
        ctx.config.api_url
    );
    let outcomes = collect(&ctx.client, &args.repo_ids).await;
    println!("{}", render(outcomes, ctx.format)?);
    Ok(())
}

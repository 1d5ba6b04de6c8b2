//! Generic search command handler
//!
//! `list` and `search` both follow the same flow:
//! 1. Issue one page of `GET /search/repositories`
//! 2. On 200, convert each item to a display row and format it
//! 3. On 4xx, show the server's messages one per line instead of a table
//!    (inside the JSON envelope's `errors` for `--format json`)
//! 4. On any other status, warn and show nothing

use log::{debug, warn};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{ApiResponse, GitHubApi, Repository, SearchParams};
use crate::error::Result;
use crate::output::{FixedColumns, Formattable, Listing, json};

/// Run one search and format whatever came back.
///
/// Returns an empty string when there is nothing to print. Transport and
/// parse failures propagate as errors.
///
/// # Type Parameters
///
/// * `D` - The display row produced for each item
///
/// # Example
///
/// ```ignore
/// let output = render_search(
///     &client,
///     &params,
///     SearchHitDisplay::header(sort),
///     |repo| SearchHitDisplay::new(repo, sort),
///     format,
/// )
/// .await?;
/// ```
pub async fn render_search<C, D, F>(
    client: &C,
    params: &SearchParams,
    header: Vec<String>,
    to_row: F,
    format: OutputFormat,
) -> Result<String>
where
    C: GitHubApi + ?Sized,
    D: FixedColumns + Serialize,
    F: Fn(&Repository) -> D,
{
    debug!("Searching repositories with q={:?}", params.query);

    match client.search_repositories(params).await? {
        ApiResponse::Ok(results) => {
            debug!(
                "Search returned {} of {} items",
                results.items.len(),
                results.total_count
            );
            let rows: Vec<D> = results.items.iter().map(to_row).collect();
            Listing::with_header(header, rows).format(format)
        }
        ApiResponse::ClientError { status, messages } => {
            debug!("Search rejected with HTTP {}", status);
            match format {
                OutputFormat::Json => Ok(json::format_json_errors(&messages)?),
                _ => Ok(messages.join("\n")),
            }
        }
        ApiResponse::Status(status) => {
            warn!("GitHub API responded with HTTP {}; no results to show", status);
            Ok(String::new())
        }
    }
}

/// Print rendered output unless it is empty
pub fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{}", output);
    }
}

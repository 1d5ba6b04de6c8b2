//! `search`: free-text repository search

use clap::Args;
use log::debug;

use crate::cli::handlers::{print_output, render_search};
use crate::cli::{CommandContext, OutputFormat, PaginationArgs, RepoSort};
use crate::client::{GitHubApi, SearchParams};
use crate::error::Result;
use crate::models::SearchHitDisplay;

/// Arguments for `ghtool search`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Words to search for
    #[arg(value_name = "WORD", num_args = 0..)]
    pub words: Vec<String>,

    /// Restrict results to one programming language
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    #[command(flatten)]
    pub pagination: PaginationArgs,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = RepoSort::Stars)]
    pub sort: RepoSort,
}

impl SearchArgs {
    /// Search params for this query
    pub fn to_params(&self) -> SearchParams {
        let query = SearchParams::text_query(&self.words, self.language.as_deref());
        self.pagination.to_params(query).sort(self.sort.as_str())
    }
}

/// Fetch and format one page of search results.
pub async fn render<C: GitHubApi + ?Sized>(
    client: &C,
    args: &SearchArgs,
    format: OutputFormat,
) -> Result<String> {
    let sort = args.sort;
    render_search(
        client,
        &args.to_params(),
        SearchHitDisplay::header(sort),
        |repo| SearchHitDisplay::new(repo, sort),
        format,
    )
    .await
}

/// Run the search command
pub async fn run(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    debug!("Searching {} for {:?}", ctx.config.api_url, args.words);
    let output = render(&ctx.client, args, ctx.format).await?;
    print_output(&output);
    Ok(())
}

//! `list`: repositories by programming language

use clap::Args;
use log::debug;

use crate::cli::handlers::{print_output, render_search};
use crate::cli::{CommandContext, OutputFormat, PaginationArgs, RepoSort};
use crate::client::{GitHubApi, SearchParams};
use crate::error::Result;
use crate::models::RankedRepoDisplay;

/// Arguments for `ghtool list`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Programming language(s) to list repositories for
    #[arg(value_name = "LANGUAGE", num_args = 0..)]
    pub languages: Vec<String>,

    #[command(flatten)]
    pub pagination: PaginationArgs,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = RepoSort::Updated)]
    pub sort: RepoSort,
}

impl ListArgs {
    /// Search params for this listing
    pub fn to_params(&self) -> SearchParams {
        self.pagination
            .to_params(SearchParams::language_query(&self.languages))
            .sort(self.sort.as_str())
    }
}

/// Fetch and format one page of repositories for the requested languages.
pub async fn render<C: GitHubApi + ?Sized>(
    client: &C,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<String> {
    let sort = args.sort;
    render_search(
        client,
        &args.to_params(),
        RankedRepoDisplay::header(sort),
        |repo| RankedRepoDisplay::new(repo, sort),
        format,
    )
    .await
}

/// Run the list command
pub async fn run(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    debug!(
        "Listing repositories for languages {:?} from {}",
        args.languages, ctx.config.api_url
    );
    let output = render(&ctx.client, args, ctx.format).await?;
    print_output(&output);
    Ok(())
}

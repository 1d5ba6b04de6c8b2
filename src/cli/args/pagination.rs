//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::SearchParams;
use crate::client::query::DEFAULT_PER_PAGE;

use super::SortDir;

/// Shared paging arguments for search-backed commands.
///
/// Flatten this into any command that pages through search results:
/// ```ignore
/// struct ListArgs {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PaginationArgs {
    /// Number of repositories per page
    #[arg(
        short = 'n',
        long = "per-page",
        visible_alias = "per_page",
        default_value_t = DEFAULT_PER_PAGE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub per_page: u32,

    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Sort order
    #[arg(long, value_enum, default_value_t = SortDir::Desc)]
    pub order: SortDir,
}

impl Default for PaginationArgs {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: 1,
            order: SortDir::Desc,
        }
    }
}

impl PaginationArgs {
    /// Apply paging and order to search params for `query`.
    pub fn to_params(&self, query: String) -> SearchParams {
        SearchParams::new(query)
            .per_page(self.per_page)
            .page(self.page)
            .order(self.order.into())
    }
}

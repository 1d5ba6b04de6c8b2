//! CLI command definitions and dispatch

use clap::{ArgMatches, Args, Command};
use log::debug;

use crate::error::{Error, Result};

pub mod args;
pub mod completions;
pub mod context;
pub mod describe;
pub mod handlers;
pub mod list;
pub mod registry;
pub mod search;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs, RepoSort};
pub use context::CommandContext;

/// Build the top-level parser from the global options and the registry
pub fn build_cli() -> Command {
    let root = Command::new("ghtool")
        .about("ghtool - Browse GitHub repositories from the command line")
        .version(env!("CARGO_PKG_VERSION"));

    registry::COMMANDS
        .iter()
        .fold(GlobalOptions::augment_args(root), |cmd, descriptor| {
            cmd.subcommand(descriptor.command())
        })
}

/// Run whichever subcommand was matched; show help if none was.
pub async fn dispatch(matches: &ArgMatches, opts: &GlobalOptions) -> Result<()> {
    let Some((name, sub_matches)) = matches.subcommand() else {
        build_cli().print_help()?;
        return Ok(());
    };

    let descriptor = registry::find(name)
        .ok_or_else(|| Error::Other(format!("unregistered command '{}'", name)))?;

    debug!("Dispatching '{}'", descriptor.name);
    (descriptor.handler)(sub_matches, opts).await
}

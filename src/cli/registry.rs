//! Static command registry
//!
//! Every subcommand is one [`CommandDescriptor`]: its name, help text,
//! argument schema and the handler that runs it. The top-level parser and
//! the dispatcher are both built from [`COMMANDS`].

use clap::{ArgMatches, Args, Command, FromArgMatches};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use log::debug;

use super::completions::{self, CompletionArgs};
use super::describe::{self, DescribeArgs};
use super::list::{self, ListArgs};
use super::search::{self, SearchArgs};
use super::{CommandContext, GlobalOptions};
use crate::error::Result;

/// Runs a parsed subcommand
pub type Handler =
    for<'a> fn(&'a ArgMatches, &'a GlobalOptions) -> LocalBoxFuture<'a, Result<()>>;

/// One registered subcommand
pub struct CommandDescriptor {
    pub name: &'static str,
    pub about: &'static str,
    pub aliases: &'static [&'static str],
    /// Adds the subcommand's arguments
    pub args: fn(Command) -> Command,
    pub handler: Handler,
}

impl CommandDescriptor {
    /// Build the clap subcommand
    pub fn command(&self) -> Command {
        (self.args)(Command::new(self.name))
            .about(self.about)
            .visible_aliases(self.aliases.iter().copied())
    }
}

/// All subcommands, in help order
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "list",
        about: "List repositories written in the given languages",
        aliases: &[],
        args: ListArgs::augment_args,
        handler: run_list,
    },
    CommandDescriptor {
        name: "search",
        about: "Search repositories by keyword",
        aliases: &[],
        args: SearchArgs::augment_args,
        handler: run_search,
    },
    CommandDescriptor {
        name: "describe",
        about: "Show details for repositories by ID",
        aliases: &["desc"],
        args: DescribeArgs::augment_args,
        handler: run_describe,
    },
    CommandDescriptor {
        name: "completion",
        about: "Generate shell completion scripts",
        aliases: &[],
        args: CompletionArgs::augment_args,
        handler: run_completion,
    },
];

/// Look up a subcommand by its canonical name
pub fn find(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|c| c.name == name)
}

fn run_list<'a>(matches: &'a ArgMatches, opts: &'a GlobalOptions) -> LocalBoxFuture<'a, Result<()>> {
    async move {
        let args = ListArgs::from_arg_matches(matches)?;
        if args.languages.is_empty() {
            debug!("No languages given; showing help");
            return print_subcommand_help("list");
        }
        let ctx = CommandContext::new(opts)?;
        list::run(&ctx, &args).await
    }
    .boxed_local()
}

fn run_search<'a>(
    matches: &'a ArgMatches,
    opts: &'a GlobalOptions,
) -> LocalBoxFuture<'a, Result<()>> {
    async move {
        let args = SearchArgs::from_arg_matches(matches)?;
        if args.words.is_empty() {
            debug!("No search words given; showing help");
            return print_subcommand_help("search");
        }
        let ctx = CommandContext::new(opts)?;
        search::run(&ctx, &args).await
    }
    .boxed_local()
}

fn run_describe<'a>(
    matches: &'a ArgMatches,
    opts: &'a GlobalOptions,
) -> LocalBoxFuture<'a, Result<()>> {
    async move {
        let args = DescribeArgs::from_arg_matches(matches)?;
        if args.repo_ids.is_empty() {
            debug!("No repository IDs given; showing help");
            return print_subcommand_help("describe");
        }
        let ctx = CommandContext::new(opts)?;
        describe::run(&ctx, &args).await
    }
    .boxed_local()
}

fn run_completion<'a>(
    matches: &'a ArgMatches,
    _opts: &'a GlobalOptions,
) -> LocalBoxFuture<'a, Result<()>> {
    async move {
        let args = CompletionArgs::from_arg_matches(matches)?;
        completions::run(&args)
    }
    .boxed_local()
}

fn print_subcommand_help(name: &str) -> Result<()> {
    let mut cli = super::build_cli();
    cli.build();
    if let Some(cmd) = cli.find_subcommand_mut(name) {
        cmd.print_help()?;
    }
    Ok(())
}

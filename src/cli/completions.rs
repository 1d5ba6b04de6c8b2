//! Shell completion scripts
//!
//! Completions are static: they cover subcommands, flags and enum values.

use std::io;

use clap::Args;
use clap_complete::{Shell, generate};

use crate::error::Result;

/// Arguments for `ghtool completion`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to `out`
pub fn write_script(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = super::build_cli();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

/// Print the completion script to stdout
pub fn run(args: &CompletionArgs) -> Result<()> {
    write_script(args.shell, &mut io::stdout());
    Ok(())
}

//! ghtool - Browse GitHub repositories from the command line

use colored::Colorize;
use env_logger::Env;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::GlobalOptions;
use error::{Error, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        exit_with(err);
    }
}

async fn run() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let opts = GlobalOptions::from_matches(&matches)?;

    init_logging(opts.debug);
    log::debug!("Resolved options: {:?}", opts);

    cli::dispatch(&matches, &opts).await
}

/// Route `log` output to stderr; `RUST_LOG` overrides `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "ghtool=debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn exit_with(err: Error) -> ! {
    match err {
        Error::Usage(e) => e.exit(),
        other => {
            eprintln!("{} {}", "Error:".red().bold(), other);
            std::process::exit(1);
        }
    }
}

//! `fair`: evidence-grounded answers from the command line.
//!
//! - `fair query --corpus <file> [--domain d] [--config f] <text>`
//! - `fair index --corpus <file> [--config f]`
//! - `fair config [--config f]`
//!
//! Results go to stdout as JSON (TOML for `config`); logs go to stderr.
//! Exit codes: 0 success, 1 runtime failure, 2 bad configuration.

use clap::{Parser, Subcommand};
use fair_agent::telemetry;
use tracing::error;

mod commands;
mod error;

pub use error::CliError;

#[derive(Parser)]
#[command(name = "fair")]
#[command(version)]
#[command(about = "Evidence-grounded answers with calibrated confidence")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity (-v debug, -vv trace). Overrides FAIR_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question from a corpus file
    Query(commands::query::QueryArgs),
    /// Load a corpus, embed it, and report what was indexed
    Index(commands::index::IndexArgs),
    /// Print the effective configuration as TOML
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.verbose {
        0 => telemetry::init_tracing("info", cli.json_logs),
        1 => telemetry::init_tracing_with_filter("debug", cli.json_logs),
        _ => telemetry::init_tracing_with_filter("trace", cli.json_logs),
    }

    let result = match cli.command {
        Commands::Query(args) => commands::query::handle_query(args).await,
        Commands::Index(args) => commands::index::handle_index(args).await,
        Commands::Config(args) => commands::config::handle_config(args),
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

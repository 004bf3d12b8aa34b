//! CLI entry point for the classic algorithm exercises

use clap::Parser;
use cs_classics::io::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() -> cs_classics::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cs_classics=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = Runner::new(std::io::stdout().lock());
    runner.run(&cli)
}

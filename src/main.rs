//! Hermetic - include-graph closure verifier
//!
//! Proves that a designated source subtree (the "active root") is closed
//! under quoted `#include` directives: every include reachable from the
//! top-level translation units resolves inside the subtree, and every file
//! physically present in the subtree is reached by some include chain.

mod cli;
mod extract;
mod inventory;
mod models;
mod reporters;
mod resolve;
mod walker;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so stdout stays a
    // clean report stream for automation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let code = cli::run(cli)?;
    std::process::exit(code);
}

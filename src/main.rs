//! tree-size — disk usage as a ranked tree.
//!
//! Thin binary entry point. All logic lives in the `treesize-core`
//! and `treesize-cli` crates.

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use treesize_cli::Cli;

/// Default log filter when `RUST_LOG` is unset: warnings only, so stdout
/// carries nothing but the tree.
const DEFAULT_LOG_FILTER: &str = "tree_size=warn,treesize_core=warn,treesize_cli=warn";

fn main() -> anyhow::Result<()> {
    // Structured logging goes to stderr; stdout is reserved for the tree.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!("tree-size starting: {cli:?}");

    let colored = console::colors_enabled();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    treesize_cli::run(cli, &mut out, colored)
}

//! Command-line arguments.
//!
//! Flag values keep the classic sentinel encoding (`-1` = unlimited depth,
//! `0` = no top-N cap) and are converted into a typed
//! [`ScanConfig`] before they reach the scanner.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use treesize_core::config::DEFAULT_THREADS;
use treesize_core::{ScanConfig, ScanError};

/// Tree Size is a CLI tool to visualize disk usage in a folder tree
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tree-size",
    version,
    about = "Tree Size is a CLI tool to visualize disk usage in a folder tree",
    long_about = "Recursively shows the largest files and folders in a tree structure with size summaries.",
    after_help = "EXAMPLES:\n    \
        tree-size scan -p ~/projects -d 2\n    \
        tree-size scan -p /var/log --top 5 --min-size 1048576\n    \
        tree-size scan --threads 16"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scan a directory and display its largest files and folders
    Scan(ScanArgs),
}

/// Options for `scan`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ScanArgs {
    /// Path to scan
    #[arg(short, long, default_value = ".", value_name = "PATH")]
    pub path: PathBuf,

    /// Max depth to scan (-1 = unlimited)
    #[arg(
        short = 'd',
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_name = "NUM"
    )]
    pub max_depth: i64,

    /// Top N largest items per folder (0 = all)
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "NUM"
    )]
    pub top: i64,

    /// Minimum size (in bytes) to include in the tree
    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_name = "BYTES")]
    pub min_size: i64,

    /// Number of concurrent filesystem operations
    #[arg(long, default_value_t = DEFAULT_THREADS as i64, value_name = "NUM")]
    pub threads: i64,
}

impl ScanArgs {
    /// Convert the raw flags into a scanner configuration.
    pub fn to_config(&self) -> Result<ScanConfig, ScanError> {
        ScanConfig::from_flags(self.max_depth, self.top, self.min_size, self.threads)
    }
}

/// tree-size CLI — argument parsing, tree rendering, and output.
///
/// Scanning lives in `treesize-core`; this crate turns command-line flags
/// into a scan and prints the resulting tree.
pub mod cli;
pub mod render;

pub use cli::{Cli, Command, ScanArgs};
pub use render::TreeRenderer;

use std::io::Write;
use tracing::{debug, info};
use treesize_core::model::size::format_count;

/// Execute a parsed command line, writing user-facing output to `out`.
///
/// Scan failures (an unreadable root, an invalid thread count) are reported
/// on `out` as `Error: ...` and are not returned as errors; only a failure to
/// write output is.
pub fn run<W: Write>(cli: Cli, out: &mut W, colored: bool) -> anyhow::Result<()> {
    match cli.command {
        Command::Scan(args) => run_scan(&args, out, colored),
    }
}

/// Run `scan` and print the tree.
pub fn run_scan<W: Write>(args: &ScanArgs, out: &mut W, colored: bool) -> anyhow::Result<()> {
    let path = args.path.display();
    writeln!(out, "Scanning {path}...")?;

    let scanned = args
        .to_config()
        .and_then(|config| treesize_core::scan(&args.path, &config).map(|report| (config, report)));
    let (config, report) = match scanned {
        Ok(scanned) => scanned,
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            return Ok(());
        }
    };

    writeln!(out, "📁 Tree for {path}")?;
    writeln!(out)?;

    match &report.root {
        Some(root) => {
            TreeRenderer::new(colored).write_tree(out, root)?;
            debug!("Rendered {} nodes", format_count(root.node_count() as u64));
        }
        None => writeln!(out, "(no entries at or above {} bytes)", config.min_size)?,
    }

    if report.skipped > 0 {
        info!(
            "{} entries could not be read and were left out",
            format_count(report.skipped)
        );
    }
    out.flush()?;
    Ok(())
}

/// Scanner module — orchestrates one scan of a directory tree.
///
/// A scan runs on its own rayon pool with a single [`AdmissionGate`] shared
/// by every task, so concurrent filesystem work is capped globally. The
/// result is an owned [`Node`] tree, built in one pass and read-only
/// afterwards.
pub mod aggregate;
pub mod builder;
pub mod gate;

pub use builder::TreeBuilder;
pub use gate::{AdmissionGate, Permit};

use crate::config::ScanConfig;
use crate::error::Result;
use crate::model::Node;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Stack size for pool workers. Nested `rayon::scope` calls grow the stack
/// with directory depth.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Outcome of a completed scan.
#[derive(Debug)]
pub struct ScanReport {
    /// The scanned tree. `None` when the root itself fell below `min_size`.
    pub root: Option<Node>,
    /// Wall-clock time spent scanning.
    pub duration: Duration,
    /// Entries below the root that were dropped or emptied because of
    /// filesystem errors.
    pub skipped: u64,
}

/// Scan `path` and build its size tree.
///
/// Fails only when the configuration is invalid, the worker pool cannot be
/// started, or `path` itself cannot be stat'd.
pub fn scan(path: impl AsRef<Path>, config: &ScanConfig) -> Result<ScanReport> {
    let path = path.as_ref();
    config.validate()?;

    let start = Instant::now();
    info!(
        "Starting scan of {} (max_depth={:?}, top={:?}, min_size={}, threads={})",
        path.display(),
        config.max_depth,
        config.top_n,
        config.min_size,
        config.threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_cpus::get().max(config.threads))
        .thread_name(|i| format!("treesize-worker-{i}"))
        .stack_size(WORKER_STACK_SIZE)
        .build()?;

    let gate = AdmissionGate::new(config.threads);
    let builder = TreeBuilder::new(config, &gate);
    let root = pool.install(|| builder.build(path, 0))?;

    let report = ScanReport {
        root,
        duration: start.elapsed(),
        skipped: builder.skipped(),
    };
    info!(
        "Scan complete in {:?}: {} nodes, {} skipped",
        report.duration,
        report.root.as_ref().map_or(0, Node::node_count),
        report.skipped
    );
    Ok(report)
}

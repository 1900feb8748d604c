//! Scan configuration.
//!
//! A [`ScanConfig`] is an immutable value handed to the builder and shared by
//! every recursive call, so two scans running side by side never interfere.

use crate::error::{Result, ScanError};

/// Default number of concurrent filesystem operations.
pub const DEFAULT_THREADS: usize = 4;

/// Parameters for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Depth at which directories stop being expanded. The root is depth 0.
    /// `None` descends without limit.
    pub max_depth: Option<usize>,

    /// Maximum children kept per directory. `None` keeps them all.
    pub top_n: Option<usize>,

    /// Entries smaller than this many bytes are dropped together with their
    /// subtree. An entry of exactly `min_size` bytes is kept.
    pub min_size: u64,

    /// Global cap on concurrently in-flight filesystem operations.
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            top_n: None,
            min_size: 0,
            threads: DEFAULT_THREADS,
        }
    }
}

impl ScanConfig {
    /// Build a config from the command line's sentinel-encoded integers.
    ///
    /// A negative `max_depth` means unlimited, `top <= 0` means no cap, and a
    /// negative `min_size` filters nothing. `threads` must be at least 1.
    pub fn from_flags(max_depth: i64, top: i64, min_size: i64, threads: i64) -> Result<Self> {
        let threads = usize::try_from(threads)
            .ok()
            .filter(|&t| t > 0)
            .ok_or(ScanError::InvalidThreadCount(threads))?;

        Ok(Self {
            max_depth: usize::try_from(max_depth).ok(),
            top_n: usize::try_from(top).ok().filter(|&n| n > 0),
            min_size: u64::try_from(min_size).unwrap_or(0),
            threads,
        })
    }

    /// Reject configurations that could never make progress.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(ScanError::InvalidThreadCount(0));
        }
        Ok(())
    }

    /// `true` when a directory at `depth` must not be expanded.
    #[inline]
    pub fn depth_exhausted(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    /// `true` when an entry of `size` bytes falls below the minimum.
    #[inline]
    pub fn is_elided(&self, size: u64) -> bool {
        size < self.min_size
    }
}

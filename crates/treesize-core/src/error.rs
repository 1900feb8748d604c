//! Error types for the scanning engine.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a scan.
///
/// Only [`ScanError::Access`] on the scan root ever reaches a caller of
/// [`crate::scanner::scan`]; the same error below the root is absorbed by the
/// builder and the entry is dropped.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The entry could not be stat'd (missing, permission denied, ...).
    #[error("cannot access {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `threads` must allow at least one concurrent filesystem operation.
    #[error("invalid thread count {0}: at least 1 is required")]
    InvalidThreadCount(i64),

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Access { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScanError>;

/// tree-size core — scanning engine and data model.
///
/// This crate contains all scanning logic with no presentation
/// dependencies. Frontends (the bundled CLI, or anything else) hand it a
/// path and a [`config::ScanConfig`] and get back an owned, ranked tree.
///
/// # Modules
///
/// - [`model`] — Owned result tree and size formatting.
/// - [`scanner`] — Bounded-parallel tree builder, admission gate, and size aggregator.
/// - [`config`] — Immutable per-scan configuration.
/// - [`error`] — Scan error type.
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use model::Node;
pub use scanner::{scan, ScanReport};

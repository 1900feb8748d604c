/// Tree builder — the recursive, bounded-parallel core of a scan.
///
/// Each directory fans its children out as tasks on the scan's rayon pool.
/// Every task reports its finished subtree through a per-directory
/// crossbeam channel; the parent drains the channel once all of its children
/// have joined, then aggregates, filters, and ranks. Arrival order on the
/// channel is arbitrary, and ranking makes the final order deterministic.
///
/// Filesystem calls go through the shared [`AdmissionGate`], which bounds
/// concurrent I/O across the whole traversal rather than per directory.
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::model::Node;
use crate::scanner::aggregate;
use crate::scanner::gate::AdmissionGate;
use compact_str::CompactString;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Builds one scan's tree. Borrowed by every task of that scan.
pub struct TreeBuilder<'a> {
    config: &'a ScanConfig,
    gate: &'a AdmissionGate,
    /// Entries absorbed as failures below the root.
    skipped: AtomicU64,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &'a ScanConfig, gate: &'a AdmissionGate) -> Self {
        Self {
            config,
            gate,
            skipped: AtomicU64::new(0),
        }
    }

    /// Number of entries dropped or emptied because of filesystem errors.
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Build the subtree rooted at `path`, which sits at `depth` below the
    /// scan root.
    ///
    /// Returns `Ok(None)` when the entry is elided by the minimum-size
    /// filter. A stat failure on `path` itself is the only error; failures
    /// further down are absorbed. Must run inside a rayon pool for the
    /// fan-out to use it.
    pub fn build(&self, path: &Path, depth: usize) -> Result<Option<Node>> {
        let meta = {
            let _permit = self.gate.acquire();
            fs::symlink_metadata(path)
        }
        .map_err(|source| ScanError::Access {
            path: path.to_path_buf(),
            source,
        })?;

        let name = entry_name(path);

        if !meta.is_dir() {
            return Ok(self.retain(Node::new_file(name, path, meta.len())));
        }

        if self.config.depth_exhausted(depth) {
            let size = {
                let _permit = self.gate.acquire();
                aggregate::total_size(path)
            }
            .unwrap_or_else(|err| {
                self.note_failure(path, "aggregate", &err);
                0
            });
            return Ok(self.retain(Node::new_dir(name, path, size)));
        }

        let names = {
            let _permit = self.gate.acquire();
            list_children(path)
        };
        let names = match names {
            Ok(names) => names,
            Err(err) => {
                // An unreadable directory stays in the tree as an empty one.
                self.note_failure(path, "list", &err);
                return Ok(self.retain(Node::new_dir(name, path, 0)));
            }
        };

        let mut node = Node::new_dir(name, path, 0);
        node.children = self.build_children(path, &names, depth + 1);
        node.size = node.children_size();

        if self.config.is_elided(node.size) {
            return Ok(None);
        }
        node.rank_children(self.config.top_n);
        Ok(Some(node))
    }

    /// Build every child of `dir` in parallel and collect the survivors.
    fn build_children(&self, dir: &Path, names: &[OsString], depth: usize) -> Vec<Node> {
        let (tx, rx) = crossbeam_channel::bounded::<Node>(names.len());

        rayon::scope(|s| {
            for child_name in names {
                let tx = tx.clone();
                let child_path = dir.join(child_name);
                s.spawn(move |_| match self.build(&child_path, depth) {
                    Ok(Some(child)) => {
                        // Capacity equals the number of senders, so this never blocks.
                        let _ = tx.send(child);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        self.skipped.fetch_add(1, Ordering::Relaxed);
                        debug!("dropping entry: {err}");
                    }
                });
            }
        });
        drop(tx);

        rx.try_iter().collect()
    }

    /// Apply the minimum-size filter to a finished node.
    fn retain(&self, node: Node) -> Option<Node> {
        (!self.config.is_elided(node.size)).then_some(node)
    }

    fn note_failure(&self, path: &Path, op: &str, err: &io::Error) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
        debug!("{op} failed for {}: {err}", path.display());
    }
}

/// Names of the immediate children of `dir`, in listing order.
fn list_children(dir: &Path) -> io::Result<Vec<OsString>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect()
}

/// Display name for an entry: its final component, or the whole path when
/// there is none (`.`, `/`, `C:\`).
pub(crate) fn entry_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => {
            let text = path.to_string_lossy();
            let trimmed = text.trim_end_matches(['/', '\\']);
            CompactString::new(if trimmed.is_empty() { &*text } else { trimmed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("/tmp/data/file.bin")), "file.bin");
        assert_eq!(entry_name(Path::new("relative/dir")), "dir");
        assert_eq!(entry_name(Path::new(".")), ".");
        assert_eq!(entry_name(Path::new("/")), "/");
        assert_eq!(entry_name(Path::new("..")), "..");
    }

    /// Every stat and listing goes through the gate, and a pool wider than
    /// the gate never gets more slots than the gate allows.
    #[test]
    fn test_build_is_admitted_through_the_gate() {
        let tmp = tempfile::TempDir::new().unwrap();
        for d in 0..8 {
            let dir = tmp.path().join(format!("dir{d}"));
            fs::create_dir(&dir).unwrap();
            for f in 0..25 {
                fs::write(dir.join(format!("f{f}.bin")), vec![0u8; f + 1]).unwrap();
            }
        }

        let config = ScanConfig {
            threads: 2,
            ..ScanConfig::default()
        };
        let gate = AdmissionGate::new(config.threads);
        let builder = TreeBuilder::new(&config, &gate);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(8)
            .build()
            .unwrap();

        let root = pool
            .install(|| builder.build(tmp.path(), 0))
            .unwrap()
            .unwrap();

        // 25 files of 1..=25 bytes per directory.
        assert_eq!(root.size, 8 * 325);
        let peak = gate.peak();
        assert!((1..=2).contains(&peak), "peak of {peak} slots");
        assert_eq!(gate.available(), gate.capacity());
        assert_eq!(builder.skipped(), 0);
    }
}

/// Size aggregator — recursive byte total for subtrees the builder does not
/// expand.
///
/// When the depth limit stops descent, the directory is still reported with
/// an accurate size by walking its whole subtree here. The walk uses `jwalk`
/// in serial mode: it already runs inside a builder task on the scan's own
/// pool, and the caller holds an admission permit for its duration.
use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;

/// Sum the sizes of every non-directory entry below `path`.
///
/// Entries that fail mid-walk (permission denied, removed during the walk)
/// are skipped and the walk continues. Only a failure to stat `path` itself
/// is returned as an error. Symbolic links are counted by their own length
/// and never followed.
pub fn total_size(path: &Path) -> io::Result<u64> {
    let root_meta = fs::symlink_metadata(path)?;
    if !root_meta.is_dir() {
        return Ok(root_meta.len());
    }

    let walker = jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut total: u64 = 0;
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                trace!("size walk skipped an entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        match entry.metadata() {
            Ok(meta) => total += meta.len(),
            Err(err) => trace!("size walk could not stat {}: {err}", entry.path().display()),
        }
    }
    Ok(total)
}

/// A single entry in the scanned tree.
///
/// Unlike an arena, the result tree is an owned recursive structure: each
/// builder task exclusively owns the node it produces and hands it to its
/// parent whole, so no indices or shared storage are needed.
use compact_str::CompactString;
use std::cmp::Ordering;
use std::path::PathBuf;

/// A file or directory in the result tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Base name of the entry (NOT the full path).
    pub name: CompactString,

    /// Full path used to re-access the entry.
    pub path: PathBuf,

    /// Bytes attributed to this entry.
    ///
    /// For files this is the entry's own length. For expanded directories it
    /// is the sum of every child that survived the minimum-size filter,
    /// taken before top-N truncation. For depth-truncated directories it is
    /// the full recursive byte total of the subtree.
    pub size: u64,

    /// `true` if this node represents a directory.
    pub is_dir: bool,

    /// Retained children, largest first. Always empty for files and for
    /// directories cut off by the depth limit.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a file node.
    pub fn new_file(name: impl Into<CompactString>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Create a directory node with no children yet.
    pub fn new_dir(name: impl Into<CompactString>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
            is_dir: true,
            children: Vec::new(),
        }
    }

    /// Look up a retained child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Sum of the retained children's sizes.
    pub fn children_size(&self) -> u64 {
        self.children.iter().map(|c| c.size).sum()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Depth of the deepest node below `self`, with `self` at depth 0.
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Sort `children` largest first, keeping at most `top_n` of them.
    ///
    /// Equal sizes fall back to name order so repeated scans of an unchanged
    /// tree render identically.
    pub(crate) fn rank_children(&mut self, top_n: Option<usize>) {
        self.children.sort_unstable_by(by_size_desc);
        if let Some(n) = top_n {
            self.children.truncate(n);
        }
    }
}

/// Descending by size, then ascending by name.
fn by_size_desc(a: &Node, b: &Node) -> Ordering {
    b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name))
}

/// Data model for the scanned tree.
///
/// Re-exports the owned node type and size-formatting helpers.
pub mod node;
pub mod size;

pub use node::Node;

//! The graph sink interface and its error types.

use owlmap_core::{EdgeId, Label, NodeId, Properties};
use thiserror::Error;

/// Errors that can occur during sink writes.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A write referenced a node the store does not know.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The store connection is gone.
    #[error("Connection lost: {0}")]
    ConnectionLost(String),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Write interface to a labeled property graph store.
///
/// `merge_node` upserts keyed by (label, `name` property); `merge_edge`
/// upserts keyed by (from, type, to). `push` persists in-place property
/// mutations of an already-created node.
pub trait GraphSink {
    /// Unconditionally insert a node.
    fn create_node(&mut self, label: Label, props: Properties) -> SinkResult<NodeId>;

    /// Upsert a node keyed by (label, `name`). Returns the existing handle
    /// on a key match, without touching the stored properties.
    fn merge_node(&mut self, label: Label, props: Properties) -> SinkResult<NodeId>;

    /// Unconditionally insert an edge.
    fn create_edge(&mut self, from: NodeId, rel_type: &str, to: NodeId) -> SinkResult<EdgeId>;

    /// Upsert an edge keyed by (from, type, to); duplicates collapse.
    fn merge_edge(&mut self, from: NodeId, rel_type: &str, to: NodeId) -> SinkResult<EdgeId>;

    /// Persist the given property map as the node's current properties.
    fn push(&mut self, id: NodeId, props: &Properties) -> SinkResult<()>;
}

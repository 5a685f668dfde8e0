//! In-memory graph sink.

use crate::{GraphSink, SinkError, SinkResult};
use owlmap_core::{EdgeId, GraphEdge, GraphNode, Label, NodeId, Properties, Value};
use std::collections::HashMap;

/// ID allocator for nodes and edges.
#[derive(Debug, Default)]
struct IdAllocator {
    next_node_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }
}

/// An in-memory labeled property graph implementing `GraphSink`.
///
/// Merge keys: nodes on (label, `name` property), edges on
/// (from, type, to). Query helpers let tests and consumers inspect the
/// produced graph without a store round-trip.
#[derive(Debug)]
pub struct MemoryGraph {
    /// Node storage
    nodes: HashMap<NodeId, GraphNode>,
    /// Edge storage
    edges: HashMap<EdgeId, GraphEdge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Node merge index: (label, name) -> node
    name_index: HashMap<(Label, String), NodeId>,
    /// Edge merge index: (from, type, to) -> edge
    edge_index: HashMap<(NodeId, String, NodeId), EdgeId>,
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            id_alloc: IdAllocator::new(),
            name_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    fn insert_node(&mut self, label: Label, props: Properties) -> NodeId {
        let id = self.id_alloc.alloc_node_id();
        let node = GraphNode::new(id, label, props);
        if let Some(name) = node.name() {
            self.name_index.insert((label, name.to_string()), id);
        }
        self.nodes.insert(id, node);
        id
    }

    // ==================== Query Operations ====================

    /// Get a node by handle.
    pub fn get_node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    /// Find a node by label and `name` property.
    pub fn find_node(&self, label: Label, name: &str) -> Option<&GraphNode> {
        self.name_index
            .get(&(label, name.to_string()))
            .and_then(|id| self.nodes.get(id))
    }

    /// All nodes carrying a label.
    pub fn nodes_by_label(&self, label: Label) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values().filter(move |n| n.label == label)
    }

    /// All edges leaving a node.
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &GraphEdge> {
        self.edges.values().filter(move |e| e.from == id)
    }

    /// Check whether an edge (from, type, to) exists.
    pub fn has_edge(&self, from: NodeId, rel_type: &str, to: NodeId) -> bool {
        self.edges
            .values()
            .any(|e| e.from == from && e.rel_type == rel_type && e.to == to)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl GraphSink for MemoryGraph {
    fn create_node(&mut self, label: Label, props: Properties) -> SinkResult<NodeId> {
        Ok(self.insert_node(label, props))
    }

    fn merge_node(&mut self, label: Label, props: Properties) -> SinkResult<NodeId> {
        let name = props
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        if let Some(name) = name {
            if let Some(&id) = self.name_index.get(&(label, name)) {
                return Ok(id);
            }
        }
        Ok(self.insert_node(label, props))
    }

    fn create_edge(&mut self, from: NodeId, rel_type: &str, to: NodeId) -> SinkResult<EdgeId> {
        if !self.nodes.contains_key(&from) {
            return Err(SinkError::NodeNotFound(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(SinkError::NodeNotFound(to));
        }
        let id = self.id_alloc.alloc_edge_id();
        self.edges.insert(id, GraphEdge::new(id, from, rel_type, to));
        Ok(id)
    }

    fn merge_edge(&mut self, from: NodeId, rel_type: &str, to: NodeId) -> SinkResult<EdgeId> {
        let key = (from, rel_type.to_string(), to);
        if let Some(&id) = self.edge_index.get(&key) {
            return Ok(id);
        }
        let id = self.create_edge(from, rel_type, to)?;
        self.edge_index.insert(key, id);
        Ok(id)
    }

    fn push(&mut self, id: NodeId, props: &Properties) -> SinkResult<()> {
        let node = self.nodes.get_mut(&id).ok_or(SinkError::NodeNotFound(id))?;
        node.props = props.clone();
        Ok(())
    }
}

//! Graph-side structures: handles, labels, nodes and edges.
//!
//! A `GraphNode` is the client-side view of a materialized vertex: the
//! sink-assigned handle, its label, and its property map. Property maps are
//! mutated in place and persisted through the sink's `push`.

use crate::{Properties, Value};
use std::fmt;

/// Unique handle for a node, assigned by the graph sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Unique handle for an edge, assigned by the graph sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// Create a new EdgeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Node label in the property graph.
///
/// The data model admits exactly two labels; object-property values on
/// individuals are labeled `Class` even when the value is an individual
/// (carried over from the source behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Class,
    Individual,
}

impl Label {
    /// The label string as written to the graph store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Class => "Class",
            Label::Individual => "Individual",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A materialized vertex in the property graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Sink-assigned handle.
    pub id: NodeId,
    /// Node label.
    pub label: Label,
    /// Property values, always including `name`.
    pub props: Properties,
}

impl GraphNode {
    /// Create a new node with the given handle, label and properties.
    pub fn new(id: NodeId, label: Label, props: Properties) -> Self {
        Self { id, label, props }
    }

    /// Get a property value by key.
    pub fn get_prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Set a property value.
    pub fn set_prop(&mut self, key: String, value: Value) {
        self.props.insert(key, value);
    }

    /// The node's `name` property, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.props.get("name").and_then(Value::as_str)
    }
}

/// A directed, typed edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    /// Sink-assigned handle.
    pub id: EdgeId,
    /// Source node.
    pub from: NodeId,
    /// Relationship type, e.g. `SUBCLASS_OF` or an uppercased property name.
    pub rel_type: String,
    /// Target node.
    pub to: NodeId,
}

impl GraphEdge {
    /// Create a new edge.
    pub fn new(id: EdgeId, from: NodeId, rel_type: impl Into<String>, to: NodeId) -> Self {
        Self {
            id,
            from,
            rel_type: rel_type.into(),
            to,
        }
    }
}

//! The identity cache.
//!
//! One entry per materialized ontology entity, keyed by IRI. The cache is
//! the single source of truth for "has this entity already been
//! materialized"; no pass reads back from the sink.

use owlmap_core::{Iri, Label, NodeId, Properties};
use std::collections::HashMap;

/// A materialized entity as the mapper sees it: the sink handle plus the
/// client-side label and property map (mutated in place, then pushed).
#[derive(Debug, Clone)]
pub struct CachedNode {
    /// Sink-assigned handle.
    pub id: NodeId,
    /// Label the entity was first materialized with.
    pub label: Label,
    /// Current property map, always including `name`.
    pub props: Properties,
}

/// Mapping from entity IRI to its one materialized node.
#[derive(Debug, Default)]
pub struct NodeCache {
    nodes: HashMap<Iri, CachedNode>,
}

impl NodeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached node for an entity.
    pub fn get(&self, iri: &Iri) -> Option<&CachedNode> {
        self.nodes.get(iri)
    }

    /// Get the node handle for an entity.
    pub fn handle(&self, iri: &Iri) -> Option<NodeId> {
        self.nodes.get(iri).map(|n| n.id)
    }

    /// Check whether an entity has been materialized.
    pub fn contains(&self, iri: &Iri) -> bool {
        self.nodes.contains_key(iri)
    }

    /// Number of materialized entities.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been materialized.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn get_mut(&mut self, iri: &Iri) -> Option<&mut CachedNode> {
        self.nodes.get_mut(iri)
    }

    pub(crate) fn insert(&mut self, iri: Iri, node: CachedNode) {
        self.nodes.insert(iri, node);
    }
}

//! The entity materializer.
//!
//! The only path by which a pass obtains a node handle. Enforces
//! at-most-one-node-per-entity through the identity cache; identity is the
//! full IRI, so entities sharing a display name stay distinct nodes.

use crate::{CachedNode, MapError, MapResult, NodeCache};
use owlmap_core::{EdgeId, Iri, Label, NodeId, Value, props};
use owlmap_graph::GraphSink;
use tracing::warn;

/// Materializes ontology entities as graph nodes, at most once each.
#[derive(Debug)]
pub struct Materializer<'a, S: GraphSink> {
    cache: &'a mut NodeCache,
    sink: &'a mut S,
}

impl<'a, S: GraphSink> Materializer<'a, S> {
    /// Create a materializer over a cache and a sink.
    pub fn new(cache: &'a mut NodeCache, sink: &'a mut S) -> Self {
        Self { cache, sink }
    }

    /// Return the node handle for an entity, materializing it on first use.
    ///
    /// A cache hit performs no sink call. A miss writes exactly one node
    /// through the sink and caches the handle; the write is an
    /// unconditional create because the cache already guarantees one node
    /// per IRI, and the `name` property is not unique across entities. If
    /// the sink rejects the write, the error propagates and no cache entry
    /// is inserted.
    ///
    /// A hit under a different label reuses the cached node under its
    /// original label (logged, not an error).
    pub fn get_or_create(&mut self, iri: &Iri, label: Label) -> MapResult<NodeId> {
        if let Some(cached) = self.cache.get(iri) {
            if cached.label != label {
                warn!(
                    entity = %iri,
                    cached_label = %cached.label,
                    requested_label = %label,
                    "entity already materialized under a different label; reusing"
                );
            }
            return Ok(cached.id);
        }

        let node_props = props! { "name" => iri.local_name() };
        let id = self.sink.create_node(label, node_props.clone())?;
        self.cache.insert(
            iri.clone(),
            CachedNode {
                id,
                label,
                props: node_props,
            },
        );
        Ok(id)
    }

    /// Set a scalar property on an already-materialized entity and push
    /// the updated property map to the sink. Last write wins per key.
    pub fn set_property(&mut self, iri: &Iri, key: &str, value: Value) -> MapResult<()> {
        let cached = self
            .cache
            .get_mut(iri)
            .ok_or_else(|| MapError::NotMaterialized(iri.clone()))?;
        cached.props.insert(key.to_string(), value);
        self.sink.push(cached.id, &cached.props)?;
        Ok(())
    }

    /// Write an edge unconditionally.
    pub fn create_edge(&mut self, from: NodeId, rel_type: &str, to: NodeId) -> MapResult<EdgeId> {
        Ok(self.sink.create_edge(from, rel_type, to)?)
    }

    /// Write an edge through the sink's upsert; duplicates collapse.
    pub fn merge_edge(&mut self, from: NodeId, rel_type: &str, to: NodeId) -> MapResult<EdgeId> {
        Ok(self.sink.merge_edge(from, rel_type, to)?)
    }
}

//! The orchestrator: runs the translation passes in a fixed order.

use crate::{MapResult, Materializer, NodeCache, passes};
use owlmap_graph::GraphSink;
use owlmap_ontology::OntologySource;
use tracing::info;

/// Drives one ontology-to-graph run start to finish.
///
/// Pass order is fixed: Class → Subclass-Hierarchy → Individual →
/// Object-Property → Existential-Restriction → Cardinality-Restriction.
/// Every pass can materialize any node it needs, so the order only affects
/// cache warm-up; the run either completes fully or aborts on the first
/// sink error.
#[derive(Debug)]
pub struct Mapper<'a, O: OntologySource, S: GraphSink> {
    source: &'a O,
    sink: &'a mut S,
    cache: NodeCache,
}

impl<'a, O: OntologySource, S: GraphSink> Mapper<'a, O, S> {
    /// Create a mapper over an ontology source and a graph sink.
    pub fn new(source: &'a O, sink: &'a mut S) -> Self {
        Self {
            source,
            sink,
            cache: NodeCache::new(),
        }
    }

    /// Run all passes. A sink failure aborts immediately; no rollback.
    pub fn run(&mut self) -> MapResult<()> {
        let mut m = Materializer::new(&mut self.cache, &mut *self.sink);
        passes::map_classes(self.source, &mut m)?;
        passes::map_hierarchy(self.source, &mut m)?;
        passes::map_individuals(self.source, &mut m)?;
        passes::map_domain_range(self.source, &mut m)?;
        passes::map_existential_restrictions(self.source, &mut m)?;
        passes::map_cardinality_restrictions(self.source, &mut m)?;
        info!(entities = self.cache.len(), "ontology to graph run complete");
        Ok(())
    }

    /// The identity cache, one entry per materialized entity.
    pub fn cache(&self) -> &NodeCache {
        &self.cache
    }

    /// Consume the mapper, keeping the identity cache.
    pub fn into_cache(self) -> NodeCache {
        self.cache
    }
}

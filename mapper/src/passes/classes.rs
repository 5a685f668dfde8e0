//! Class pass: one `Class` node per ontology class.

use crate::{MapResult, Materializer};
use owlmap_core::Label;
use owlmap_graph::GraphSink;
use owlmap_ontology::OntologySource;

/// Materialize every class in the ontology. Produces no relationships.
pub fn map_classes<O, S>(source: &O, m: &mut Materializer<'_, S>) -> MapResult<()>
where
    O: OntologySource,
    S: GraphSink,
{
    for class in source.classes() {
        m.get_or_create(&class.iri, Label::Class)?;
    }
    Ok(())
}

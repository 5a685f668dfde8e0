//! Subclass-hierarchy pass: `SUBCLASS_OF` edges between named classes.

use crate::{MapResult, Materializer};
use owlmap_core::Label;
use owlmap_graph::GraphSink;
use owlmap_ontology::{ClassExpression, OntologySource};
use tracing::debug;

/// Fixed relationship type for the class hierarchy.
pub const SUBCLASS_OF: &str = "SUBCLASS_OF";

/// For every class, write a `SUBCLASS_OF` edge to each superclass entry
/// that is itself a named class of the ontology. Restrictions and other
/// anonymous expressions are skipped. Edges use the sink's upsert, so
/// repeated axioms collapse to one edge.
pub fn map_hierarchy<O, S>(source: &O, m: &mut Materializer<'_, S>) -> MapResult<()>
where
    O: OntologySource,
    S: GraphSink,
{
    for class in source.classes() {
        for sup in &class.supers {
            let Some(sup_iri) = sup.as_class() else {
                continue;
            };
            if source.class(sup_iri).is_none() {
                continue;
            }
            let sub_id = m.get_or_create(&class.iri, Label::Class)?;
            let sup_id = m.get_or_create(sup_iri, Label::Class)?;
            m.merge_edge(sub_id, SUBCLASS_OF, sup_id)?;
            debug!(
                sub = class.iri.local_name(),
                sup = sup_iri.local_name(),
                "SUBCLASS_OF"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeCache;
    use owlmap_graph::MemoryGraph;
    use owlmap_ontology::{CardinalityKind, OntClass, OntologyModel};

    fn hierarchy_model() -> OntologyModel {
        OntologyModel::builder()
            .class(OntClass::new("ex#Animal"))
            .class(
                OntClass::new("ex#Dog")
                    .with_super(ClassExpression::from("ex#Animal"))
                    .with_super(ClassExpression::cardinality(
                        "ex#hasOwner",
                        CardinalityKind::Max,
                        1,
                    )),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_named_superclass_yields_edge() {
        let model = hierarchy_model();
        let mut cache = NodeCache::new();
        let mut sink = MemoryGraph::new();

        map_hierarchy(&model, &mut Materializer::new(&mut cache, &mut sink)).unwrap();

        let dog = sink.find_node(Label::Class, "Dog").unwrap().id;
        let animal = sink.find_node(Label::Class, "Animal").unwrap().id;
        assert!(sink.has_edge(dog, SUBCLASS_OF, animal));
        // The restriction entry produces nothing here.
        assert_eq!(sink.edge_count(), 1);
    }

    #[test]
    fn test_unknown_superclass_is_skipped() {
        let model = OntologyModel::builder()
            .class(OntClass::new("ex#Dog").with_super(ClassExpression::from("ex#Alien")))
            .build()
            .unwrap();
        let mut cache = NodeCache::new();
        let mut sink = MemoryGraph::new();

        map_hierarchy(&model, &mut Materializer::new(&mut cache, &mut sink)).unwrap();

        assert_eq!(sink.edge_count(), 0);
    }

    #[test]
    fn test_running_twice_adds_no_edges() {
        let model = hierarchy_model();
        let mut cache = NodeCache::new();
        let mut sink = MemoryGraph::new();
        let mut m = Materializer::new(&mut cache, &mut sink);

        map_hierarchy(&model, &mut m).unwrap();
        let after_once = sink.edge_count();
        let mut m = Materializer::new(&mut cache, &mut sink);
        map_hierarchy(&model, &mut m).unwrap();

        assert_eq!(sink.edge_count(), after_once);
    }
}

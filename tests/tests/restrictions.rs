//! Restriction handling across full runs.

use owlmap_core::{Iri, Label, Value};
use owlmap_graph::MemoryGraph;
use owlmap_mapper::{Mapper, Materializer, NodeCache, passes};
use owlmap_ontology::{CardinalityKind, ClassExpression, OntClass, OntologyModel};
use owlmap_tests::{iri, zoo_with_restrictions};

#[test]
fn test_full_run_with_restrictions() {
    let model = zoo_with_restrictions();
    let mut sink = MemoryGraph::new();

    Mapper::new(&model, &mut sink).run().unwrap();

    let dog = sink.find_node(Label::Class, "Dog").unwrap();
    let person = sink.find_node(Label::Class, "Person").unwrap().id;

    // The existential restriction adds a second HASOWNER edge on top of
    // the domain/range one: restriction edges use unconditional create.
    let hasowner_edges = sink
        .edges_from(dog.id)
        .filter(|e| e.rel_type == "HASOWNER" && e.to == person)
        .count();
    assert_eq!(hasowner_edges, 2);

    // The cardinality restriction lands as a property, not a node.
    assert_eq!(
        dog.get_prop("has_cardinality_hasToy"),
        Some(&Value::String("max:3".into()))
    );
    assert!(sink.find_node(Label::Class, "hasToy").is_none());
}

#[test]
fn test_cardinality_reapply_overwrites_bound() {
    let max3 = OntologyModel::builder()
        .class(
            OntClass::new(iri("Person")).with_super(ClassExpression::cardinality(
                iri("hasChild"),
                CardinalityKind::Max,
                3,
            )),
        )
        .build()
        .unwrap();
    let max5 = OntologyModel::builder()
        .class(
            OntClass::new(iri("Person")).with_super(ClassExpression::cardinality(
                iri("hasChild"),
                CardinalityKind::Max,
                5,
            )),
        )
        .build()
        .unwrap();

    let mut sink = MemoryGraph::new();
    let mut cache = NodeCache::new();

    let mut m = Materializer::new(&mut cache, &mut sink);
    passes::map_cardinality_restrictions(&max3, &mut m).unwrap();
    let person = sink.find_node(Label::Class, "Person").unwrap();
    assert_eq!(
        person.get_prop("has_cardinality_hasChild"),
        Some(&Value::String("max:3".into()))
    );

    let mut m = Materializer::new(&mut cache, &mut sink);
    passes::map_cardinality_restrictions(&max5, &mut m).unwrap();
    let person = sink.find_node(Label::Class, "Person").unwrap();
    assert_eq!(
        person.get_prop("has_cardinality_hasChild"),
        Some(&Value::String("max:5".into()))
    );
    assert_eq!(sink.node_count(), 1);
}

#[test]
fn test_nested_existential_target_produces_nothing() {
    let nested = ClassExpression::SomeValuesFrom {
        property: Iri::new(iri("hasPart")),
        target: Box::new(ClassExpression::some_values_from(
            iri("hasOwner"),
            iri("Person"),
        )),
    };
    let model = OntologyModel::builder()
        .class(OntClass::new(iri("Machine")).with_super(nested))
        .build()
        .unwrap();
    let mut sink = MemoryGraph::new();

    // The malformed construct is skipped; the run still completes.
    Mapper::new(&model, &mut sink).run().unwrap();

    let machine = sink.find_node(Label::Class, "Machine").unwrap().id;
    assert_eq!(sink.edges_from(machine).count(), 0);
    assert_eq!(sink.edge_count(), 0);
}

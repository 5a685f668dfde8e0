//! End-to-end mapping runs over the zoo ontology.

use owlmap_core::{Iri, Label};
use owlmap_graph::MemoryGraph;
use owlmap_mapper::{Mapper, Materializer, NodeCache, passes};
use owlmap_ontology::{OntClass, OntologyModel};
use owlmap_tests::{iri, zoo};

#[test]
fn test_zoo_end_to_end() {
    let model = zoo();
    let mut sink = MemoryGraph::new();

    Mapper::new(&model, &mut sink).run().unwrap();

    // Nodes: Animal, Dog, Person as Class; p1 labeled Class (deliberate
    // carry-over); rex as Individual.
    let animal = sink.find_node(Label::Class, "Animal").unwrap().id;
    let dog = sink.find_node(Label::Class, "Dog").unwrap().id;
    let person = sink.find_node(Label::Class, "Person").unwrap().id;
    let p1 = sink.find_node(Label::Class, "p1").unwrap().id;
    let rex = sink.find_node(Label::Individual, "rex").unwrap().id;
    assert_eq!(sink.node_count(), 5);

    assert!(sink.has_edge(dog, "SUBCLASS_OF", animal));
    assert!(sink.has_edge(dog, "HASOWNER", person));
    assert!(sink.has_edge(rex, "INSTANCE_OF", dog));
    assert!(sink.has_edge(rex, "HASOWNER", p1));
    // p1 is itself an individual of Person.
    assert!(sink.has_edge(p1, "INSTANCE_OF", person));
    assert_eq!(sink.edge_count(), 5);
}

#[test]
fn test_identity_uniqueness_across_passes() {
    // Dog is touched by the class, hierarchy, individual (via rex),
    // domain/range and restriction passes; it must still map to one node.
    let model = zoo();
    let mut sink = MemoryGraph::new();

    let mut mapper = Mapper::new(&model, &mut sink);
    mapper.run().unwrap();
    let cache = mapper.into_cache();

    assert_eq!(cache.len(), 5);
    for local in ["Animal", "Dog", "Person", "rex", "p1"] {
        let entity = Iri::new(iri(local));
        assert!(cache.contains(&entity), "missing cache entry for {local}");
    }
    assert_eq!(sink.node_count(), cache.len());
}

#[test]
fn test_same_display_name_stays_distinct() {
    // Classes from different namespaces share the local name "Thing";
    // each keeps its own node and cache entry after a full run.
    let a = Iri::new("http://a.org#Thing");
    let b = Iri::new("http://b.org#Thing");
    let model = OntologyModel::builder()
        .class(OntClass::new(a.clone()))
        .class(OntClass::new(b.clone()))
        .build()
        .unwrap();
    let mut sink = MemoryGraph::new();

    let mut mapper = Mapper::new(&model, &mut sink);
    mapper.run().unwrap();
    let cache = mapper.into_cache();

    let a_handle = cache.handle(&a).unwrap();
    let b_handle = cache.handle(&b).unwrap();
    assert_ne!(a_handle, b_handle);
    assert_eq!(sink.node_count(), 2);
    assert_eq!(sink.get_node(a_handle).unwrap().name(), Some("Thing"));
    assert_eq!(sink.get_node(b_handle).unwrap().name(), Some("Thing"));
}

#[test]
fn test_subclass_pass_is_idempotent() {
    let model = zoo();
    let mut sink = MemoryGraph::new();
    let mut cache = NodeCache::new();

    let mut m = Materializer::new(&mut cache, &mut sink);
    passes::map_hierarchy(&model, &mut m).unwrap();
    let once = sink.edge_count();

    let mut m = Materializer::new(&mut cache, &mut sink);
    passes::map_hierarchy(&model, &mut m).unwrap();

    assert_eq!(sink.edge_count(), once);
}

#[test]
fn test_individuals_can_run_first() {
    // Every pass materializes what it needs; running the individual pass
    // against a cold cache still yields a consistent graph.
    let model = zoo();
    let mut sink = MemoryGraph::new();
    let mut cache = NodeCache::new();

    let mut m = Materializer::new(&mut cache, &mut sink);
    passes::map_individuals(&model, &mut m).unwrap();
    passes::map_classes(&model, &mut m).unwrap();

    let rex = sink.find_node(Label::Individual, "rex").unwrap().id;
    let dog = sink.find_node(Label::Class, "Dog").unwrap().id;
    assert!(sink.has_edge(rex, "INSTANCE_OF", dog));
    // The class pass reuses the Dog node the individual pass created.
    assert_eq!(sink.nodes_by_label(Label::Class).count(), 4);
}

//! Shared ontology fixtures for the integration tests.

use owlmap_ontology::{
    CardinalityKind, ClassExpression, Individual, ObjectProperty, OntClass, OntologyModel,
};

pub const NS: &str = "http://example.org/zoo#";

/// IRI in the zoo namespace.
pub fn iri(local: &str) -> String {
    format!("{NS}{local}")
}

/// The zoo ontology:
/// - classes `Animal`, `Dog` (`Dog is_a Animal`), `Person`
/// - object property `hasOwner` (domain `Dog`, range `Person`)
/// - individual `rex` (`rex is_a Dog`, `rex hasOwner p1`)
/// - individual `p1` (`p1 is_a Person`)
pub fn zoo() -> OntologyModel {
    OntologyModel::builder()
        .class(OntClass::new(iri("Animal")))
        .class(OntClass::new(iri("Dog")).with_super(ClassExpression::Class(iri("Animal").into())))
        .class(OntClass::new(iri("Person")))
        .object_property(
            ObjectProperty::new(iri("hasOwner"))
                .with_domain(iri("Dog").as_str())
                .with_range(iri("Person").as_str()),
        )
        .individual(
            Individual::new(iri("rex"))
                .instance_of(iri("Dog"))
                .with_object_value(iri("hasOwner"), iri("p1")),
        )
        .individual(Individual::new(iri("p1")).instance_of(iri("Person")))
        .build()
        .expect("zoo ontology builds")
}

/// The zoo ontology extended with restrictions on `Dog`:
/// - existential: `Dog is_a (hasOwner some Person)`
/// - cardinality: `Dog is_a (hasToy max 3)`
pub fn zoo_with_restrictions() -> OntologyModel {
    OntologyModel::builder()
        .class(OntClass::new(iri("Animal")))
        .class(
            OntClass::new(iri("Dog"))
                .with_super(ClassExpression::Class(iri("Animal").into()))
                .with_super(ClassExpression::some_values_from(
                    iri("hasOwner"),
                    iri("Person"),
                ))
                .with_super(ClassExpression::cardinality(
                    iri("hasToy"),
                    CardinalityKind::Max,
                    3,
                )),
        )
        .class(OntClass::new(iri("Person")))
        .object_property(
            ObjectProperty::new(iri("hasOwner"))
                .with_domain(iri("Dog").as_str())
                .with_range(iri("Person").as_str()),
        )
        .build()
        .expect("zoo ontology builds")
}

//! Ontology constructs and the source oracle.
//!
//! `OntologySource` is the read-only interface the translation passes
//! consume. `OntologyModel` is the in-memory implementation, built through
//! `OntologyBuilder` which validates duplicate IRIs at `build()`.

use crate::ClassExpression;
use owlmap_core::{Iri, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during ontology model construction.
#[derive(Debug, Error)]
pub enum OntologyError {
    #[error("Duplicate class IRI: {0}")]
    DuplicateClass(Iri),

    #[error("Duplicate object property IRI: {0}")]
    DuplicateProperty(Iri),

    #[error("Duplicate individual IRI: {0}")]
    DuplicateIndividual(Iri),
}

/// A named ontology class with its direct superclass list.
///
/// The superclass list mixes plain classes with restriction expressions;
/// passes pick out the entries they care about.
#[derive(Debug, Clone)]
pub struct OntClass {
    /// Global identifier.
    pub iri: Iri,
    /// Direct superclass entries (classes and restrictions).
    pub supers: Vec<ClassExpression>,
}

impl OntClass {
    /// Create a class with an empty superclass list.
    pub fn new(iri: impl Into<Iri>) -> Self {
        Self {
            iri: iri.into(),
            supers: Vec::new(),
        }
    }

    /// Add a superclass entry.
    pub fn with_super(mut self, expr: impl Into<ClassExpression>) -> Self {
        self.supers.push(expr.into());
        self
    }
}

/// An object property with its super-properties and declared domain/range.
#[derive(Debug, Clone)]
pub struct ObjectProperty {
    /// Global identifier.
    pub iri: Iri,
    /// Declared super-properties (may include property-type markers).
    pub super_properties: Vec<Iri>,
    /// Declared domain classes (possibly empty).
    pub domain: Vec<ClassExpression>,
    /// Declared range classes (possibly empty).
    pub range: Vec<ClassExpression>,
}

impl ObjectProperty {
    /// Create a property with no super-properties, domain or range.
    pub fn new(iri: impl Into<Iri>) -> Self {
        Self {
            iri: iri.into(),
            super_properties: Vec::new(),
            domain: Vec::new(),
            range: Vec::new(),
        }
    }

    /// Add a super-property.
    pub fn with_super_property(mut self, iri: impl Into<Iri>) -> Self {
        self.super_properties.push(iri.into());
        self
    }

    /// Add a domain entry.
    pub fn with_domain(mut self, expr: impl Into<ClassExpression>) -> Self {
        self.domain.push(expr.into());
        self
    }

    /// Add a range entry.
    pub fn with_range(mut self, expr: impl Into<ClassExpression>) -> Self {
        self.range.push(expr.into());
        self
    }
}

/// An ontology individual with its assertions.
#[derive(Debug, Clone)]
pub struct Individual {
    /// Global identifier.
    pub iri: Iri,
    /// Direct class memberships (`is_a`).
    pub classes: Vec<Iri>,
    /// Object-property assertions: (property, value entity).
    pub object_values: Vec<(Iri, Iri)>,
    /// Scalar data-property assertions: (property local name, value).
    pub data_values: Vec<(String, Value)>,
}

impl Individual {
    /// Create an individual with no assertions.
    pub fn new(iri: impl Into<Iri>) -> Self {
        Self {
            iri: iri.into(),
            classes: Vec::new(),
            object_values: Vec::new(),
            data_values: Vec::new(),
        }
    }

    /// Add a class membership.
    pub fn instance_of(mut self, class: impl Into<Iri>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add an object-property assertion.
    pub fn with_object_value(mut self, property: impl Into<Iri>, value: impl Into<Iri>) -> Self {
        self.object_values.push((property.into(), value.into()));
        self
    }

    /// Add a scalar data-property assertion.
    pub fn with_data_value(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data_values.push((property.into(), value.into()));
        self
    }

    /// Asserted values of a given object property, in assertion order.
    pub fn values_of<'a>(&'a self, property: &'a Iri) -> impl Iterator<Item = &'a Iri> {
        self.object_values
            .iter()
            .filter(move |(p, _)| p == property)
            .map(|(_, v)| v)
    }
}

/// Read-only oracle over an ontology's constructs.
///
/// The translation passes depend only on this trait; any backing store that
/// can enumerate classes, object properties and individuals can drive a run.
pub trait OntologySource {
    /// All named classes.
    fn classes(&self) -> &[OntClass];

    /// All object properties.
    fn object_properties(&self) -> &[ObjectProperty];

    /// All individuals.
    fn individuals(&self) -> &[Individual];

    /// Look up a class by IRI.
    fn class(&self, iri: &Iri) -> Option<&OntClass>;

    /// Look up an object property by IRI.
    fn property(&self, iri: &Iri) -> Option<&ObjectProperty>;
}

/// In-memory ontology. Immutable after construction.
#[derive(Debug, Default)]
pub struct OntologyModel {
    classes: Vec<OntClass>,
    class_index: HashMap<Iri, usize>,
    properties: Vec<ObjectProperty>,
    property_index: HashMap<Iri, usize>,
    individuals: Vec<Individual>,
}

impl OntologyModel {
    /// Start building an ontology model.
    pub fn builder() -> OntologyBuilder {
        OntologyBuilder::default()
    }
}

impl OntologySource for OntologyModel {
    fn classes(&self) -> &[OntClass] {
        &self.classes
    }

    fn object_properties(&self) -> &[ObjectProperty] {
        &self.properties
    }

    fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    fn class(&self, iri: &Iri) -> Option<&OntClass> {
        self.class_index.get(iri).map(|&i| &self.classes[i])
    }

    fn property(&self, iri: &Iri) -> Option<&ObjectProperty> {
        self.property_index.get(iri).map(|&i| &self.properties[i])
    }
}

/// Builder for constructing an immutable `OntologyModel`.
#[derive(Debug, Default)]
pub struct OntologyBuilder {
    classes: Vec<OntClass>,
    properties: Vec<ObjectProperty>,
    individuals: Vec<Individual>,
}

impl OntologyBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class.
    pub fn class(mut self, class: OntClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Add an object property.
    pub fn object_property(mut self, property: ObjectProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Add an individual.
    pub fn individual(mut self, individual: Individual) -> Self {
        self.individuals.push(individual);
        self
    }

    /// Build the immutable model, rejecting duplicate IRIs.
    pub fn build(self) -> Result<OntologyModel, OntologyError> {
        let mut class_index = HashMap::new();
        for (i, class) in self.classes.iter().enumerate() {
            if class_index.insert(class.iri.clone(), i).is_some() {
                return Err(OntologyError::DuplicateClass(class.iri.clone()));
            }
        }

        let mut property_index = HashMap::new();
        for (i, property) in self.properties.iter().enumerate() {
            if property_index.insert(property.iri.clone(), i).is_some() {
                return Err(OntologyError::DuplicateProperty(property.iri.clone()));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for individual in &self.individuals {
            if !seen.insert(individual.iri.clone()) {
                return Err(OntologyError::DuplicateIndividual(individual.iri.clone()));
            }
        }

        Ok(OntologyModel {
            classes: self.classes,
            class_index,
            properties: self.properties,
            property_index,
            individuals: self.individuals,
        })
    }
}

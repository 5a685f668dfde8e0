//! Class expressions as a tagged variant.
//!
//! A class's superclass list mixes plain named classes with anonymous
//! restriction expressions. Passes match on the tag to decide whether an
//! entry becomes a node, an edge, or a node property.

use owlmap_core::Iri;

/// Kind of a cardinality restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalityKind {
    /// At least `bound` values.
    Min,
    /// At most `bound` values.
    Max,
    /// Exactly `bound` values.
    Exact,
}

impl CardinalityKind {
    /// The kind string used in the `has_cardinality_*` encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardinalityKind::Min => "min",
            CardinalityKind::Max => "max",
            CardinalityKind::Exact => "exact",
        }
    }
}

/// A class or anonymous class expression appearing in a superclass list
/// or a property's domain/range.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassExpression {
    /// A plain named class.
    Class(Iri),
    /// Existential restriction: "some value of `property` from `target`".
    SomeValuesFrom {
        property: Iri,
        target: Box<ClassExpression>,
    },
    /// Cardinality restriction bounding `property` on instances.
    Cardinality {
        property: Iri,
        kind: CardinalityKind,
        bound: u32,
    },
    /// Any other anonymous expression (unions, complements, ...).
    /// Never materialized; passes skip it.
    Other,
}

impl ClassExpression {
    /// Existential restriction over a named target class.
    pub fn some_values_from(property: impl Into<Iri>, target: impl Into<Iri>) -> Self {
        ClassExpression::SomeValuesFrom {
            property: property.into(),
            target: Box::new(ClassExpression::Class(target.into())),
        }
    }

    /// Cardinality restriction.
    pub fn cardinality(property: impl Into<Iri>, kind: CardinalityKind, bound: u32) -> Self {
        ClassExpression::Cardinality {
            property: property.into(),
            kind,
            bound,
        }
    }

    /// Returns true if this is a plain named class.
    pub fn is_class(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }

    /// Returns true if this is a restriction expression of any kind.
    pub fn is_restriction(&self) -> bool {
        matches!(
            self,
            ClassExpression::SomeValuesFrom { .. } | ClassExpression::Cardinality { .. }
        )
    }

    /// Get the IRI if this is a plain named class.
    pub fn as_class(&self) -> Option<&Iri> {
        match self {
            ClassExpression::Class(iri) => Some(iri),
            _ => None,
        }
    }
}

impl From<Iri> for ClassExpression {
    fn from(iri: Iri) -> Self {
        ClassExpression::Class(iri)
    }
}

impl From<&str> for ClassExpression {
    fn from(iri: &str) -> Self {
        ClassExpression::Class(Iri::new(iri))
    }
}

//! owlmap Ontology Source
//!
//! Read-only view over an ontology's constructs:
//! - Class expressions (plain classes, restrictions) as a tagged variant
//! - Classes, object properties and individuals with their axioms
//! - The `OntologySource` trait the translation passes consume
//! - An in-memory `OntologyModel` with builder-style construction

mod expression;
mod model;

pub use expression::*;
pub use model::*;

//! owlmap Mapper
//!
//! The translation engine: walks ontology constructs and emits property
//! graph nodes and relationships.
//!
//! Responsibilities:
//! - Guarantee each ontology entity maps to exactly one graph node
//!   (identity cache + materializer)
//! - Run the translation passes in a fixed order
//! - Encode restrictions as edges (existential) or node properties
//!   (cardinality)

mod cache;
mod error;
mod mapper;
mod materializer;
pub mod passes;

pub use cache::{CachedNode, NodeCache};
pub use error::{MapError, MapResult};
pub use mapper::Mapper;
pub use materializer::Materializer;

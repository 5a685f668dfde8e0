//! owlmap Core Types
//!
//! This crate provides the foundational types used throughout owlmap:
//! - Entity identity (Iri) and local-name resolution
//! - Value types (the scalar Value enum)
//! - Graph handles and structures (NodeId, EdgeId, Label, GraphNode, GraphEdge)

mod iri;
mod node;
mod value;

pub use iri::*;
pub use node::*;
pub use value::*;

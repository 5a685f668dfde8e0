//! owlmap Graph Sink
//!
//! Persistence side of the translation:
//! - The `GraphSink` trait (create/merge nodes and edges, push property
//!   updates) every pass writes through
//! - `MemoryGraph`, an in-memory sink with merge indexes and query helpers

mod memory;
mod sink;

pub use memory::MemoryGraph;
pub use sink::*;

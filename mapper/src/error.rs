//! Error types for the translation engine.

use owlmap_core::Iri;
use owlmap_graph::SinkError;
use thiserror::Error;

/// Errors that can occur during a mapping run.
///
/// A sink failure aborts the run immediately; no rollback is attempted, so
/// a partially populated graph may remain.
#[derive(Debug, Error)]
pub enum MapError {
    /// The graph sink rejected a write.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// A property write targeted an entity that was never materialized.
    #[error("Entity not materialized: {0}")]
    NotMaterialized(Iri),
}

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

//! Entity identity for ontology constructs.
//!
//! Every ontology entity (class, object property, individual) is named by a
//! globally unique IRI-like string. The IRI is the identity key throughout
//! the system; display names are derived, never authoritative.

use std::fmt;

/// Globally unique identifier of an ontology entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    /// Create an Iri from a raw identifier string.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Get the full identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the short display name of this entity.
    ///
    /// The local name is the fragment after the last `#`, else the segment
    /// after the last `/`, else the whole identifier.
    pub fn local_name(&self) -> &str {
        match self.0.rsplit_once('#') {
            Some((_, frag)) if !frag.is_empty() => frag,
            _ => match self.0.rsplit_once('/') {
                Some((_, seg)) if !seg.is_empty() => seg,
                _ => &self.0,
            },
        }
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri::new(s)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

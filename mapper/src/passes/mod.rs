//! Translation passes.
//!
//! Each pass consumes the ontology source and the materializer, and emits
//! graph writes. Passes are independent: any pass can materialize any node
//! it needs, so ordering only affects cache warm-up.

mod classes;
mod hierarchy;
mod individuals;
mod properties;
mod restrictions;

pub use classes::map_classes;
pub use hierarchy::map_hierarchy;
pub use individuals::map_individuals;
pub use properties::map_domain_range;
pub use restrictions::{map_cardinality_restrictions, map_existential_restrictions};

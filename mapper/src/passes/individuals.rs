//! Individual pass: membership, object-property assertions, data properties.

use crate::{MapResult, Materializer};
use owlmap_core::Label;
use owlmap_graph::GraphSink;
use owlmap_ontology::OntologySource;
use tracing::debug;

/// Fixed relationship type for class membership.
pub const INSTANCE_OF: &str = "INSTANCE_OF";

/// For every individual:
/// 1. materialize its `Individual` node,
/// 2. write an edge per asserted object-property value (value nodes keep
///    the `Class` label even when the value is an individual — carried
///    over from the source behavior),
/// 3. write an `INSTANCE_OF` edge per direct class membership,
/// 4. set scalar data-property values on the node and push them.
pub fn map_individuals<O, S>(source: &O, m: &mut Materializer<'_, S>) -> MapResult<()>
where
    O: OntologySource,
    S: GraphSink,
{
    for individual in source.individuals() {
        let ind_id = m.get_or_create(&individual.iri, Label::Individual)?;

        for property in source.object_properties() {
            let rel_type = property.iri.local_name().to_uppercase();
            for value in individual.values_of(&property.iri) {
                let value_id = m.get_or_create(value, Label::Class)?;
                m.merge_edge(ind_id, &rel_type, value_id)?;
                debug!(
                    individual = individual.iri.local_name(),
                    rel = rel_type.as_str(),
                    value = value.local_name(),
                    "object property assertion"
                );
            }
        }

        for class_iri in &individual.classes {
            if source.class(class_iri).is_none() {
                continue;
            }
            let class_id = m.get_or_create(class_iri, Label::Class)?;
            m.merge_edge(ind_id, INSTANCE_OF, class_id)?;
            debug!(
                individual = individual.iri.local_name(),
                class = class_iri.local_name(),
                "INSTANCE_OF"
            );
        }

        for (key, value) in &individual.data_values {
            m.set_property(&individual.iri, key, value.clone())?;
        }
    }
    Ok(())
}

//! Restriction passes: existential restrictions become edges, cardinality
//! restrictions become node properties.

use crate::{MapResult, Materializer};
use owlmap_core::{Label, Value};
use owlmap_graph::GraphSink;
use owlmap_ontology::{ClassExpression, OntologySource};
use tracing::debug;

/// For every class, for every "some values from" entry in its superclass
/// list whose target is a plain class: write an edge from the restricted
/// class to the target, typed by the restricted property's uppercased
/// local name. Nested restriction targets are skipped without error.
pub fn map_existential_restrictions<O, S>(source: &O, m: &mut Materializer<'_, S>) -> MapResult<()>
where
    O: OntologySource,
    S: GraphSink,
{
    for class in source.classes() {
        for sup in &class.supers {
            let ClassExpression::SomeValuesFrom { property, target } = sup else {
                continue;
            };
            let Some(target_iri) = target.as_class() else {
                debug!(
                    class = class.iri.local_name(),
                    "skipping existential restriction with non-class target"
                );
                continue;
            };
            let class_id = m.get_or_create(&class.iri, Label::Class)?;
            let target_id = m.get_or_create(target_iri, Label::Class)?;
            let rel_type = property.local_name().to_uppercase();
            m.create_edge(class_id, &rel_type, target_id)?;
            debug!(
                class = class.iri.local_name(),
                rel = rel_type.as_str(),
                target = target_iri.local_name(),
                "existential restriction edge"
            );
        }
    }
    Ok(())
}

/// For every class, for every min/max/exact cardinality entry in its
/// superclass list: set `has_cardinality_<propertyLocalName>` to
/// `"<kind>:<bound>"` on the class's own node and push the update.
/// A later restriction on the same property overwrites the earlier value.
pub fn map_cardinality_restrictions<O, S>(source: &O, m: &mut Materializer<'_, S>) -> MapResult<()>
where
    O: OntologySource,
    S: GraphSink,
{
    for class in source.classes() {
        for sup in &class.supers {
            let ClassExpression::Cardinality {
                property,
                kind,
                bound,
            } = sup
            else {
                continue;
            };
            m.get_or_create(&class.iri, Label::Class)?;
            let key = format!("has_cardinality_{}", property.local_name());
            let value = format!("{}:{}", kind.as_str(), bound);
            debug!(
                class = class.iri.local_name(),
                key = key.as_str(),
                value = value.as_str(),
                "cardinality restriction"
            );
            m.set_property(&class.iri, &key, Value::from(value))?;
        }
    }
    Ok(())
}

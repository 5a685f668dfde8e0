//! Object-property domain/range pass.
//!
//! Each property contributes an effective axiom set: the property itself
//! plus its declared super-properties. Every axiom writes its own
//! domain → range edges under its own (uppercased) local name, with
//! domain/range inheritance between the base property and its supers.

use crate::{MapResult, Materializer};
use owlmap_core::{Iri, Label};
use owlmap_graph::GraphSink;
use owlmap_ontology::{ClassExpression, ObjectProperty, OntologySource};
use tracing::debug;

/// Property-type markers that appear in super-property lists but are not
/// real properties.
const PROPERTY_TYPE_MARKERS: [&str; 2] = ["ObjectProperty", "TransitiveProperty"];

/// One entry of the effective axiom set.
struct Axiom<'a> {
    iri: &'a Iri,
    domain: &'a [ClassExpression],
    range: &'a [ClassExpression],
}

/// For each object property, write domain → range edges for the property
/// and each of its super-property axioms.
///
/// Inheritance fallback:
/// - a super-property axiom with no declared domain/range uses the base
///   property's declaration;
/// - the base property with no declared domain/range inherits from its
///   super-properties (so a property declared bare still yields edges
///   under its own name).
///
/// Pairs where either side is an anonymous expression are skipped.
pub fn map_domain_range<O, S>(source: &O, m: &mut Materializer<'_, S>) -> MapResult<()>
where
    O: OntologySource,
    S: GraphSink,
{
    for property in source.object_properties() {
        let supers = resolved_supers(source, property);

        let inherited_domain = collect_inherited(&property.domain, &supers, |p| &p.domain);
        let inherited_range = collect_inherited(&property.range, &supers, |p| &p.range);

        let mut axioms = Vec::new();
        if !is_marker(&property.iri) {
            axioms.push(Axiom {
                iri: &property.iri,
                domain: &inherited_domain,
                range: &inherited_range,
            });
        }
        for sup in &supers {
            axioms.push(Axiom {
                iri: &sup.iri,
                domain: if sup.domain.is_empty() {
                    &property.domain
                } else {
                    &sup.domain
                },
                range: if sup.range.is_empty() {
                    &property.range
                } else {
                    &sup.range
                },
            });
        }

        for axiom in &axioms {
            let rel_type = axiom.iri.local_name().to_uppercase();
            for domain_expr in axiom.domain {
                for range_expr in axiom.range {
                    let (Some(d_iri), Some(r_iri)) =
                        (domain_expr.as_class(), range_expr.as_class())
                    else {
                        // Anonymous class expressions are never a node.
                        continue;
                    };
                    let d_id = m.get_or_create(d_iri, Label::Class)?;
                    let r_id = m.get_or_create(r_iri, Label::Class)?;
                    m.merge_edge(d_id, &rel_type, r_id)?;
                    debug!(
                        domain = d_iri.local_name(),
                        rel = rel_type.as_str(),
                        range = r_iri.local_name(),
                        "domain/range edge"
                    );
                }
            }
        }
    }
    Ok(())
}

/// Whether an IRI names a property-type marker rather than a real
/// property. Applies to every member of the effective axiom set, the base
/// property included.
fn is_marker(iri: &Iri) -> bool {
    PROPERTY_TYPE_MARKERS.contains(&iri.local_name())
}

/// Declared super-properties that resolve to real properties, in
/// declaration order. Markers and unresolvable IRIs are dropped.
fn resolved_supers<'a, O: OntologySource>(
    source: &'a O,
    property: &ObjectProperty,
) -> Vec<&'a ObjectProperty> {
    property
        .super_properties
        .iter()
        .filter(|iri| !is_marker(iri))
        .filter_map(|iri| source.property(iri))
        .collect()
}

/// The base axiom's effective declaration: its own if non-empty, else the
/// concatenation of its supers' declarations.
fn collect_inherited<'a>(
    own: &'a [ClassExpression],
    supers: &[&'a ObjectProperty],
    select: impl Fn(&'a ObjectProperty) -> &'a [ClassExpression],
) -> Vec<ClassExpression> {
    if !own.is_empty() {
        return own.to_vec();
    }
    supers
        .iter()
        .flat_map(|sup| select(sup).iter().cloned())
        .collect()
}

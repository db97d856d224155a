//! Adaptive render-definition generation
//!
//! Produces a starter definition from a sample JSON record using field
//! heuristics: title/hidden classification, prefix-family grouping, and
//! section assembly. The output is good enough to display imported content
//! that has no authored definition.

use serde_json::{Map, Value};

use super::{classifier, prefix_groups, sections};
use crate::value_objects::RenderDefinition;

/// Generate a render definition for one content record.
///
/// A root that is not a JSON object (or yields no usable field map) produces
/// the minimal catch-all; anything else is classified and grouped into a
/// full definition.
pub fn generate(sample: &Value) -> RenderDefinition {
    let Some(fields) = field_map(sample) else {
        return RenderDefinition::catch_all();
    };

    let classified = classifier::classify(fields);
    let groups = prefix_groups::detect_groups(&classified.remaining);
    let sections = sections::build_sections(&classified.remaining, groups);

    RenderDefinition {
        title_field: classified.title_field,
        hidden: classified.hidden,
        sections,
        catch_all: false,
        ..RenderDefinition::catch_all()
    }
}

/// Authored content conventionally nests the record under a `fields` key;
/// unwrap it when present, otherwise use the root object directly.
fn field_map(sample: &Value) -> Option<&Map<String, Value>> {
    let root = sample.as_object()?;
    match root.get("fields").and_then(Value::as_object) {
        Some(nested) => Some(nested),
        None => Some(root),
    }
}

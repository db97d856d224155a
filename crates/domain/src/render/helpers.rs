//! Shared predicates and formatters for the render pipeline
//!
//! Free functions over immutable data; every other pipeline stage builds on
//! these.

use serde_json::Value;

/// Well-known metadata fields that are never displayed.
const HIDDEN_FIELDS: &[&str] = &[
    "pk",
    "model",
    "document",
    "illustration",
    "url",
    "key",
    "slug",
    "hover",
    "v2_converted_path",
    "img_main",
    "page_no",
    "spell_list",
    "environments",
];

/// Check whether a field is metadata that should never be displayed.
///
/// Matches the well-known name set case-insensitively, plus any name carrying
/// a double-underscore join (e.g. `document__slug`).
pub fn is_hidden_field(name: &str) -> bool {
    name.contains("__") || HIDDEN_FIELDS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Check whether a value is semantically empty.
///
/// True for JSON null, empty or whitespace-only strings, the placeholder
/// strings `-` and `—`, and empty arrays. Numbers, booleans, and objects are
/// never empty.
pub fn is_null_or_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty() || s == "-" || s == "—",
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Check whether a field holds prose that should render as rich text.
pub fn is_description_field(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower == "desc"
        || lower == "description"
        || lower.ends_with("_desc")
        || lower.ends_with("_description")
}

/// Format a snake_case field name as a display label.
///
/// `hit_points` becomes `Hit Points`; empty segments are skipped.
pub fn format_field_name(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a group prefix as a section label, with simple pluralization.
///
/// `saving_throw` becomes `Saving Throws`; a label already ending in `s`
/// (`skill_bonus` → `Skill Bonus`) is left alone.
pub fn format_group_label(prefix: &str) -> String {
    let mut label = format_field_name(prefix);
    if !label.ends_with('s') {
        label.push('s');
    }
    label
}

/// Remove a leading `prefix_` from a field name, case-insensitively.
///
/// Returns the name unchanged when it doesn't start with that prefix.
pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    match name.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) && name[prefix.len()..].starts_with('_') => {
            &name[prefix.len() + 1..]
        }
        _ => name,
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

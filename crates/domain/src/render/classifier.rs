//! Field classification - title, hidden, and remaining fields

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::field_info::FieldInfo;
use super::helpers;

/// Title candidates in preference order; `name` beats `title` even when
/// `title` appears first in the record.
const TITLE_CANDIDATES: [&str; 2] = ["name", "title"];

/// Fallback title field reported when a record has neither candidate. The
/// record then has no such field at all; the UI shows it as untitled.
const DEFAULT_TITLE_FIELD: &str = "name";

/// A content record's fields split into title, hidden, and displayable.
#[derive(Debug)]
pub(crate) struct ClassifiedFields {
    pub(crate) title_field: String,
    pub(crate) hidden: BTreeSet<String>,
    pub(crate) remaining: Vec<FieldInfo>,
}

/// Split a field map into the title field, hidden fields, and everything
/// else wrapped with null/complex flags.
pub(crate) fn classify(fields: &Map<String, Value>) -> ClassifiedFields {
    let title_field = TITLE_CANDIDATES
        .iter()
        .copied()
        .find_map(|candidate| fields.keys().find(|k| k.eq_ignore_ascii_case(candidate)))
        .cloned()
        .unwrap_or_else(|| DEFAULT_TITLE_FIELD.to_string());

    let mut hidden = BTreeSet::new();
    let mut remaining = Vec::new();
    for (name, value) in fields {
        if name.eq_ignore_ascii_case(&title_field) {
            continue;
        }
        if helpers::is_hidden_field(name) {
            hidden.insert(name.clone());
        } else {
            remaining.push(FieldInfo::new(name.clone(), value.clone()));
        }
    }

    ClassifiedFields {
        title_field,
        hidden,
        remaining,
    }
}

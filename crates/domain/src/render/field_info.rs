//! Classified field intermediates
//!
//! The JSON kind is assigned exactly once, when a field enters the pipeline;
//! later stages branch on these flags instead of re-inspecting the value.

use serde_json::Value;

use super::helpers;

/// Closed set of JSON value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// One content-record field with its classification flags.
#[derive(Debug, Clone)]
pub(crate) struct FieldInfo {
    pub(crate) name: String,
    pub(crate) value: Value,
    pub(crate) kind: JsonKind,
    pub(crate) is_null: bool,
    pub(crate) is_complex: bool,
}

impl FieldInfo {
    pub(crate) fn new(name: impl Into<String>, value: Value) -> Self {
        let kind = JsonKind::of(&value);
        Self {
            name: name.into(),
            is_null: helpers::is_null_or_empty(&value),
            is_complex: matches!(kind, JsonKind::Array | JsonKind::Object),
            kind,
            value,
        }
    }
}

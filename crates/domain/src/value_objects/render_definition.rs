//! RenderDefinition - structured description of how to display a content record
//!
//! Authored definitions are published as static JSON files and deserialized
//! into these types; generated definitions are assembled by the render
//! pipeline. Both serialize in camelCase to match the authored file format.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How a section lays out its fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionRender {
    /// Labeled field rows
    #[default]
    #[serde(rename = "fields")]
    Fields,
    /// Compact one-line stat row (ability scores)
    #[serde(rename = "stat-row")]
    StatRow,
}

/// How a single field value is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRender {
    /// Plain inline value
    #[default]
    #[serde(rename = "text")]
    Text,
    /// Rendered as a markdown/HTML block
    #[serde(rename = "richtext")]
    Richtext,
}

/// Defines how a single JSON field should be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderField {
    /// JSON field name relative to the record's field map
    pub path: String,
    /// Display label; empty means the UI derives one from the field name
    #[serde(default)]
    pub label: String,
    /// Render hint for the value
    #[serde(default)]
    pub render: FieldRender,
}

/// A labeled, styled group of fields within a render definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSection {
    /// Section heading
    pub label: String,
    /// Layout style for the section
    #[serde(default)]
    pub render: SectionRender,
    /// Fields shown in this section, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<RenderField>>,
    /// Whether the section starts collapsed
    #[serde(default)]
    pub collapsed: bool,
}

/// Structured description of how to display one content record's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDefinition {
    /// Definition file format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Optional display name override for the content type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Field whose value is shown as the record title
    #[serde(default = "default_title_field")]
    pub title_field: String,
    /// Fields never displayed
    #[serde(default)]
    pub hidden: BTreeSet<String>,
    /// Ordered display sections
    #[serde(default)]
    pub sections: Vec<RenderSection>,
    /// Marks a minimal fallback definition with no authored layout
    #[serde(default)]
    pub catch_all: bool,
}

fn default_version() -> u32 {
    1
}

fn default_title_field() -> String {
    "name".to_string()
}

impl RenderDefinition {
    /// The generic fallback definition used when nothing could be classified.
    pub fn catch_all() -> Self {
        Self {
            version: default_version(),
            display_name: None,
            title_field: default_title_field(),
            hidden: BTreeSet::new(),
            sections: Vec::new(),
            catch_all: true,
        }
    }

    /// Parse an authored definition file, rejecting invalid layouts.
    pub fn from_json(body: &str) -> Result<Self, DomainError> {
        let definition: Self =
            serde_json::from_str(body).map_err(|e| DomainError::parse(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check the exclusivity invariants: the title field is shown as the
    /// record title and nowhere else.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title_field.trim().is_empty() {
            return Err(DomainError::validation("titleField cannot be blank"));
        }
        if self
            .hidden
            .iter()
            .any(|h| h.eq_ignore_ascii_case(&self.title_field))
        {
            return Err(DomainError::validation(format!(
                "titleField '{}' cannot also be hidden",
                self.title_field
            )));
        }
        for section in &self.sections {
            let in_section = section
                .fields
                .iter()
                .flatten()
                .any(|f| f.path.eq_ignore_ascii_case(&self.title_field));
            if in_section {
                return Err(DomainError::validation(format!(
                    "titleField '{}' cannot appear in section '{}'",
                    self.title_field, section.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catch_all_definition_has_empty_layout() {
        let definition = RenderDefinition::catch_all();
        assert!(definition.catch_all);
        assert_eq!(definition.title_field, "name");
        assert!(definition.sections.is_empty());
        assert!(definition.hidden.is_empty());
    }

    #[test]
    fn authored_file_deserializes_with_defaults() {
        let definition =
            RenderDefinition::from_json(r#"{"titleField":"name","sections":[]}"#).unwrap();
        assert_eq!(definition.version, 1);
        assert_eq!(definition.title_field, "name");
        assert!(!definition.catch_all);
        assert!(definition.display_name.is_none());
    }

    #[test]
    fn section_render_uses_kebab_discriminants() {
        let json = r#"{"label":"Ability Scores","render":"stat-row","collapsed":false}"#;
        let section: RenderSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.render, SectionRender::StatRow);

        let out = serde_json::to_string(&section).unwrap();
        assert!(out.contains(r#""render":"stat-row""#));
    }

    #[test]
    fn field_render_defaults_to_text() {
        let field: RenderField = serde_json::from_str(r#"{"path":"hit_points"}"#).unwrap();
        assert_eq!(field.render, FieldRender::Text);
        assert_eq!(field.label, "");
    }

    #[test]
    fn serialization_round_trips() {
        let definition = RenderDefinition {
            version: 2,
            display_name: Some("Bestiary".to_string()),
            title_field: "name".to_string(),
            hidden: ["pk".to_string(), "model".to_string()].into_iter().collect(),
            sections: vec![RenderSection {
                label: "Overview".to_string(),
                render: SectionRender::Fields,
                fields: Some(vec![RenderField {
                    path: "description".to_string(),
                    label: "Description".to_string(),
                    render: FieldRender::Richtext,
                }]),
                collapsed: false,
            }],
            catch_all: false,
        };

        let json = serde_json::to_string(&definition).unwrap();
        let back: RenderDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(definition, back);
        assert!(json.contains(r#""displayName":"Bestiary""#));
        assert!(json.contains(r#""titleField":"name""#));
    }

    #[test]
    fn validate_rejects_hidden_title_field() {
        let definition = RenderDefinition {
            hidden: ["Name".to_string()].into_iter().collect(),
            ..RenderDefinition::catch_all()
        };
        assert!(matches!(
            definition.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_title_field_inside_a_section() {
        let mut definition = RenderDefinition::catch_all();
        definition.sections.push(RenderSection {
            label: "Overview".to_string(),
            render: SectionRender::Fields,
            fields: Some(vec![RenderField {
                path: "name".to_string(),
                label: String::new(),
                render: FieldRender::Text,
            }]),
            collapsed: false,
        });
        assert!(definition.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_title_field() {
        let definition = RenderDefinition {
            title_field: "   ".to_string(),
            ..RenderDefinition::catch_all()
        };
        assert!(definition.validate().is_err());
    }

    #[test]
    fn from_json_rejects_malformed_body() {
        assert!(matches!(
            RenderDefinition::from_json("{invalid-json"),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn from_json_rejects_unknown_render_hint() {
        let body = r#"{"titleField":"name","sections":[{"label":"X","render":"chips"}]}"#;
        assert!(matches!(
            RenderDefinition::from_json(body),
            Err(DomainError::Parse(_))
        ));
    }
}

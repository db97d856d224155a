//! Section assembly from classified fields and prefix groups
//!
//! Emission order is fixed: Overview first, domain groups ordered by label,
//! Additional Data last.

use std::collections::HashSet;

use super::field_info::FieldInfo;
use super::helpers;
use super::prefix_groups::{self, PrefixGroup, ABILITY_SUFFIXES};
use crate::value_objects::{FieldRender, RenderField, RenderSection, SectionRender};

/// Three-letter stat labels, aligned with `ABILITY_SUFFIXES`.
const ABILITY_LABELS: [&str; 6] = ["STR", "DEX", "CON", "INT", "WIS", "CHA"];

/// Assemble the ordered display sections for one content record.
pub(crate) fn build_sections(remaining: &[FieldInfo], groups: Vec<PrefixGroup>) -> Vec<RenderSection> {
    let grouped: HashSet<&str> = groups
        .iter()
        .flat_map(|g| g.fields.iter().map(|f| f.name.as_str()))
        .collect();
    let (complex, simple): (Vec<&FieldInfo>, Vec<&FieldInfo>) = remaining
        .iter()
        .filter(|f| !grouped.contains(f.name.as_str()))
        .partition(|f| f.is_complex);

    let mut sections = Vec::new();

    if let Some(overview) = overview_section(simple) {
        sections.push(overview);
    }

    let mut groups = groups;
    groups.sort_by(|a, b| a.label.cmp(&b.label));
    for group in &groups {
        if prefix_groups::is_ability_score_group(group) {
            sections.push(ability_score_section(group));
        } else {
            sections.push(grouped_section(group));
        }
    }

    if let Some(additional) = additional_data_section(complex) {
        sections.push(additional);
    }

    sections
}

/// Ungrouped plain fields, in encounter order with descriptions pushed to
/// the end so prose doesn't interrupt the short stats.
fn overview_section(mut fields: Vec<&FieldInfo>) -> Option<RenderSection> {
    if fields.is_empty() {
        return None;
    }
    fields.sort_by_key(|f| helpers::is_description_field(&f.name));

    Some(RenderSection {
        label: "Overview".to_string(),
        render: SectionRender::Fields,
        collapsed: false,
        fields: Some(
            fields
                .into_iter()
                .map(|f| RenderField {
                    path: f.name.clone(),
                    label: helpers::format_field_name(&f.name),
                    render: if helpers::is_description_field(&f.name) {
                        FieldRender::Richtext
                    } else {
                        FieldRender::Text
                    },
                })
                .collect(),
        ),
    })
}

/// The six canonical abilities as a compact stat row, always expanded.
fn ability_score_section(group: &PrefixGroup) -> RenderSection {
    let fields = ABILITY_SUFFIXES
        .iter()
        .copied()
        .zip(ABILITY_LABELS.iter().copied())
        .map(|(suffix, label)| {
            let path = group
                .fields
                .iter()
                .find(|f| helpers::strip_prefix(&f.name, &group.prefix).eq_ignore_ascii_case(suffix))
                .map(|f| f.name.clone())
                .unwrap_or_else(|| format!("{}_{}", group.prefix, suffix));
            RenderField {
                path,
                label: label.to_string(),
                render: FieldRender::Text,
            }
        })
        .collect();

    RenderSection {
        label: "Ability Scores".to_string(),
        render: SectionRender::StatRow,
        collapsed: false,
        fields: Some(fields),
    }
}

/// A prefix family as a field list; collapses when mostly empty.
fn grouped_section(group: &PrefixGroup) -> RenderSection {
    let null_count = group.fields.iter().filter(|f| f.is_null).count();
    let mut fields: Vec<&FieldInfo> = group.fields.iter().collect();
    fields.sort_by_key(|f| f.is_null);

    RenderSection {
        label: group.label.clone(),
        render: SectionRender::Fields,
        collapsed: null_count * 2 > group.fields.len(),
        fields: Some(
            fields
                .into_iter()
                .map(|f| RenderField {
                    path: f.name.clone(),
                    label: helpers::format_field_name(helpers::strip_prefix(&f.name, &group.prefix)),
                    render: FieldRender::Text,
                })
                .collect(),
        ),
    }
}

/// Ungrouped objects and arrays; always present but tucked away collapsed.
fn additional_data_section(fields: Vec<&FieldInfo>) -> Option<RenderSection> {
    if fields.is_empty() {
        return None;
    }

    Some(RenderSection {
        label: "Additional Data".to_string(),
        render: SectionRender::Fields,
        collapsed: true,
        fields: Some(
            fields
                .into_iter()
                .map(|f| RenderField {
                    path: f.name.clone(),
                    label: helpers::format_field_name(&f.name),
                    render: FieldRender::Text,
                })
                .collect(),
        ),
    })
}

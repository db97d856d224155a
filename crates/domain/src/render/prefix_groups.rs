//! Underscore-prefix family detection
//!
//! Imported content frequently encodes related fields as `prefix_suffix`
//! families (`saving_throw_fire`, `saving_throw_cold`, ...). Every underscore
//! position in a name yields a candidate prefix; a candidate claims its
//! fields only when at least three share it, and nested prefixes resolve in
//! favor of the most specific one.

use std::collections::{BTreeMap, HashSet};

use super::field_info::FieldInfo;
use super::helpers;

/// Minimum family size for a prefix to become a group.
const MIN_GROUP_SIZE: usize = 3;

/// Canonical ability suffixes, in display order.
pub(crate) const ABILITY_SUFFIXES: [&str; 6] = [
    "strength",
    "dexterity",
    "constitution",
    "intelligence",
    "wisdom",
    "charisma",
];

/// A family of fields sharing an underscore-delimited name prefix.
#[derive(Debug, Clone)]
pub(crate) struct PrefixGroup {
    pub(crate) prefix: String,
    pub(crate) label: String,
    pub(crate) fields: Vec<FieldInfo>,
}

/// Detect prefix families among the displayable fields.
///
/// Fields without an interior underscore never group. Longer prefixes claim
/// their fields before shorter ones, so each field belongs to at most one
/// group; equal-length prefixes are visited in lexicographic order to keep
/// the outcome deterministic.
pub(crate) fn detect_groups(fields: &[FieldInfo]) -> Vec<PrefixGroup> {
    let mut candidates: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, field) in fields.iter().enumerate() {
        for (pos, _) in field.name.match_indices('_') {
            if pos == 0 {
                continue;
            }
            candidates.entry(&field.name[..pos]).or_default().push(idx);
        }
    }

    let mut ordered: Vec<(&str, Vec<usize>)> = candidates
        .into_iter()
        .filter(|(_, members)| members.len() >= MIN_GROUP_SIZE)
        .collect();
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut claimed: HashSet<usize> = HashSet::new();
    let mut groups = Vec::new();
    for (prefix, members) in ordered {
        let unclaimed: Vec<usize> = members
            .into_iter()
            .filter(|idx| !claimed.contains(idx))
            .collect();
        if unclaimed.len() < MIN_GROUP_SIZE {
            continue;
        }
        claimed.extend(unclaimed.iter().copied());
        groups.push(PrefixGroup {
            prefix: prefix.to_string(),
            label: helpers::format_group_label(prefix),
            fields: unclaimed.into_iter().map(|idx| fields[idx].clone()).collect(),
        });
    }

    groups
}

/// Check whether a group is exactly the six canonical ability scores.
///
/// The stripped suffixes must cover all six abilities and nothing else; a
/// subset or superset is an ordinary field family.
pub(crate) fn is_ability_score_group(group: &PrefixGroup) -> bool {
    if group.fields.len() != ABILITY_SUFFIXES.len() {
        return false;
    }
    let suffixes: HashSet<String> = group
        .fields
        .iter()
        .map(|f| helpers::strip_prefix(&f.name, &group.prefix).to_ascii_lowercase())
        .collect();
    suffixes.len() == ABILITY_SUFFIXES.len()
        && ABILITY_SUFFIXES.iter().all(|s| suffixes.contains(*s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str) -> FieldInfo {
        FieldInfo::new(name, json!("x"))
    }

    fn ability_group(prefix: &str) -> PrefixGroup {
        let fields = ABILITY_SUFFIXES
            .iter()
            .map(|suffix| field(&format!("{prefix}_{suffix}")))
            .collect();
        PrefixGroup {
            prefix: prefix.to_string(),
            label: helpers::format_group_label(prefix),
            fields,
        }
    }

    #[test]
    fn fields_without_interior_underscore_never_group() {
        let fields = vec![field("species"), field("level"), field("_private"), field("size")];
        assert!(detect_groups(&fields).is_empty());
    }

    #[test]
    fn two_member_families_are_not_groups() {
        let fields = vec![field("saving_throw_fire"), field("saving_throw_cold")];
        assert!(detect_groups(&fields).is_empty());
    }

    #[test]
    fn three_member_family_becomes_a_group() {
        let fields = vec![
            field("saving_throw_fire"),
            field("saving_throw_cold"),
            field("saving_throw_acid"),
        ];
        let groups = detect_groups(&fields);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].prefix, "saving_throw");
        assert_eq!(groups[0].label, "Saving Throws");
        assert_eq!(groups[0].fields.len(), 3);
    }

    #[test]
    fn longest_prefix_wins_over_nested_shorter_prefix() {
        // `ability` and `ability_score` both qualify; the longer one claims
        // the fields and starves the shorter.
        let fields = vec![
            field("ability_score_strength"),
            field("ability_score_dexterity"),
            field("ability_score_constitution"),
        ];
        let groups = detect_groups(&fields);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].prefix, "ability_score");
    }

    #[test]
    fn shorter_prefix_still_groups_leftover_fields() {
        let fields = vec![
            field("ability_score_strength"),
            field("ability_score_dexterity"),
            field("ability_score_constitution"),
            field("ability_cast"),
            field("ability_melee"),
            field("ability_ranged"),
        ];
        let groups = detect_groups(&fields);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].prefix, "ability_score");
        assert_eq!(groups[1].prefix, "ability");
        assert_eq!(groups[1].fields.len(), 3);
    }

    #[test]
    fn each_field_belongs_to_at_most_one_group() {
        let fields = vec![
            field("ability_score_strength"),
            field("ability_score_dexterity"),
            field("ability_score_constitution"),
            field("ability_score_intelligence"),
        ];
        let groups = detect_groups(&fields);

        let total: usize = groups.iter().map(|g| g.fields.len()).sum();
        assert_eq!(total, 4);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn ability_score_group_requires_exactly_the_six_canonical_suffixes() {
        assert!(is_ability_score_group(&ability_group("ability_score")));
        assert!(is_ability_score_group(&ability_group("stat")));

        let mut subset = ability_group("ability_score");
        subset.fields.pop();
        assert!(!is_ability_score_group(&subset));

        let mut superset = ability_group("ability_score");
        superset.fields.push(field("ability_score_luck"));
        assert!(!is_ability_score_group(&superset));

        let mut wrong = ability_group("ability_score");
        wrong.fields[5] = field("ability_score_luck");
        assert!(!is_ability_score_group(&wrong));
    }

    #[test]
    fn ability_score_detection_ignores_suffix_case() {
        let fields = ABILITY_SUFFIXES
            .iter()
            .map(|suffix| field(&format!("Stat_{}", suffix.to_uppercase())))
            .collect::<Vec<_>>();
        let group = PrefixGroup {
            prefix: "Stat".to_string(),
            label: "Stats".to_string(),
            fields,
        };
        assert!(is_ability_score_group(&group));
    }
}

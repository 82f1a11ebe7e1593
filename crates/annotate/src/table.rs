//! Flat entity table and per-category summary.

use std::collections::BTreeMap;

use lexicon::Category;
use serde::{Deserialize, Serialize};

use crate::entity::EntityMatches;

/// One display row. Serialized with the column names as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRow {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Type")]
    pub entity_type: Category,
    /// `"<value>%"`, in the score's display form (`92.8%`, `93%`).
    #[serde(rename = "Confidence")]
    pub confidence: String,
    /// `"<start>-<end>"` in character offsets.
    #[serde(rename = "Position")]
    pub position: String,
}

/// Column headers, in display order.
pub const TABLE_COLUMNS: [&str; 4] = ["Entity", "Type", "Confidence", "Position"];

/// Flattens matches into rows: categories in declared order, matches in
/// emission order (not by position). No matches gives an empty vector.
pub fn build_table(matches: &EntityMatches) -> Vec<EntityRow> {
    matches
        .iter()
        .map(|entity| EntityRow {
            entity: entity.text().to_string(),
            entity_type: entity.category(),
            confidence: format!("{}%", entity.score()),
            position: format!("{}-{}", entity.char_start(), entity.char_end()),
        })
        .collect()
}

/// Count of matches per category, every category present.
pub fn summarize(matches: &EntityMatches) -> BTreeMap<Category, usize> {
    matches.counts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityMatcher;

    #[test]
    fn empty_matches_give_empty_table() {
        let rows = build_table(&EntityMatches::default());
        assert!(rows.is_empty());
        let summary = summarize(&EntityMatches::default());
        assert!(summary.values().all(|&n| n == 0));
    }

    #[test]
    fn rows_follow_category_then_emission_order() {
        let matcher = EntityMatcher::builtin().unwrap();
        let text = "lactate high, nausea noted, renal function poor";
        let rows = build_table(&matcher.find_matches(text));
        let got: Vec<(&str, Category)> = rows
            .iter()
            .map(|r| (r.entity.as_str(), r.entity_type))
            .collect();
        assert_eq!(
            got,
            vec![
                ("nausea", Category::Symptom),
                ("renal", Category::Anatomy),
                ("lactate", Category::Test),
            ]
        );
        assert_eq!(rows[0].confidence, "92.8%");
        assert_eq!(rows[0].position, "14-20");
        assert_eq!(rows[1].confidence, "95%");
        assert_eq!(rows[2].position, "0-7");
    }

    #[test]
    fn position_uses_character_offsets() {
        let matcher = EntityMatcher::builtin().unwrap();
        let rows = build_table(&matcher.find_matches("Ärztin: fever"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, "8-13");
    }

    #[test]
    fn rows_serialize_with_column_names() {
        let row = EntityRow {
            entity: "biopsy".into(),
            entity_type: Category::Test,
            confidence: "94.2%".into(),
            position: "3-9".into(),
        };
        let value = serde_json::to_value(&row).unwrap();
        for column in TABLE_COLUMNS {
            assert!(value.get(column).is_some(), "missing {column}");
        }
        assert_eq!(value["Type"], "Test");
    }

    #[test]
    fn summary_counts_match_category_lengths() {
        let matcher = EntityMatcher::builtin().unwrap();
        let matches = matcher.find_matches("cough, dry cough and fever");
        let summary = summarize(&matches);
        for category in Category::ALL {
            assert_eq!(summary[&category], matches.for_category(category).len());
        }
        assert_eq!(summary[&Category::Symptom], 4);
    }
}

//! Match records produced by the entity matcher.
//!
//! An [`EntityMatch`] is one occurrence of one lexicon term. Offsets are
//! carried twice: UTF-8 byte offsets (`start`/`end`, valid for slicing the
//! source `&str`) and Unicode scalar offsets (`char_start`/`char_end`, what a
//! human counting characters would report). For ASCII input the two pairs are
//! identical. Serialized, the character offsets are `start`/`end` and the
//! byte offsets `byte_start`/`byte_end`.
//!
//! Matches are read-only once built; fields are exposed through accessors.

use std::collections::BTreeMap;

use lexicon::Category;
use serde::ser::{Serialize, Serializer};

use crate::scoring::Confidence;

/// One occurrence of a lexicon term in the source text.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EntityMatch {
    category: Category,
    text: String,
    #[serde(rename = "byte_start")]
    start: usize,
    #[serde(rename = "byte_end")]
    end: usize,
    #[serde(rename = "start")]
    char_start: usize,
    #[serde(rename = "end")]
    char_end: usize,
    confidence: Confidence,
}

impl EntityMatch {
    pub(crate) fn new(
        category: Category,
        text: &str,
        (start, end): (usize, usize),
        (char_start, char_end): (usize, usize),
        confidence: impl Into<Confidence>,
    ) -> Self {
        Self {
            category,
            text: text.to_string(),
            start,
            end,
            char_start,
            char_end,
            confidence: confidence.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The matched slice exactly as it appears in the source (case preserved).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset (inclusive) in the source text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset (exclusive) in the source text.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Character offset (inclusive) in the source text.
    pub fn char_start(&self) -> usize {
        self.char_start
    }

    /// Character offset (exclusive) in the source text.
    pub fn char_end(&self) -> usize {
        self.char_end
    }

    pub fn confidence(&self) -> f64 {
        self.confidence.value()
    }

    /// The score with its display form, as shown in markup and tables.
    pub fn score(&self) -> Confidence {
        self.confidence
    }

    /// True if the two byte spans share at least one offset.
    pub fn overlaps(&self, other: &EntityMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// All matches for one input, grouped by category in matcher emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityMatches {
    groups: [Vec<EntityMatch>; Category::COUNT],
}

impl EntityMatches {
    pub(crate) fn push(&mut self, entity: EntityMatch) {
        self.groups[entity.category.index()].push(entity);
    }

    /// Matches of one category, in emission (lexicon term) order.
    pub fn for_category(&self, category: Category) -> &[EntityMatch] {
        &self.groups[category.index()]
    }

    /// Every match, categories in declared order, each in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityMatch> + '_ {
        self.groups.iter().flatten()
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Per-category counts; every category is present, zero when unmatched.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.for_category(category).len()))
            .collect()
    }
}

impl Serialize for EntityMatches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            Category::ALL
                .into_iter()
                .map(|category| (category.name(), self.for_category(category))),
        )
    }
}

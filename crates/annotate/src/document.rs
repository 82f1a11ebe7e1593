use std::collections::BTreeMap;

use lexicon::Category;
use serde::Serialize;

use crate::entity::EntityMatches;
use crate::table::EntityRow;

/// Complete result of annotating one input text.
///
/// ```text
/// AnnotatedDocument
/// ├── matches: EntityMatches             # grouped by category, emission order
/// ├── markup: String                     # source text with rendered spans
/// ├── rows: Vec<EntityRow>               # flat table
/// ├── summary: BTreeMap<Category, usize> # per-category counts
/// └── annotate_version: u32              # config version used
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedDocument {
    pub matches: EntityMatches,
    pub markup: String,
    pub rows: Vec<EntityRow>,
    pub summary: BTreeMap<Category, usize>,
    pub annotate_version: u32,
}

impl AnnotatedDocument {
    pub fn total_entities(&self) -> usize {
        self.matches.total()
    }

    /// True when nothing was recognized; callers typically show a
    /// "no entities" placeholder instead of the table.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

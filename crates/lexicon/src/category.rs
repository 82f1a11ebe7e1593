//! The closed set of entity categories.
//!
//! Every category carries two pieces of static data that travel with it:
//! a display color (opaque to matching, passed through to renderers) and the
//! linear scoring parameters used to derive a confidence from term length.
//!
//! The declaration order `Disease, Drug, Symptom, Anatomy, Test` is
//! significant. Matching, tabulation and summaries all iterate categories in
//! this order, and the derived `Ord` follows it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// Medical entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Disease,
    Drug,
    Symptom,
    Anatomy,
    Test,
}

/// Linear confidence parameters: `base + per_char * term_len`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoring {
    pub base: f64,
    pub per_char: f64,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// All categories in declaration order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Disease,
        Category::Drug,
        Category::Symptom,
        Category::Anatomy,
        Category::Test,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Disease => 0,
            Category::Drug => 1,
            Category::Symptom => 2,
            Category::Anatomy => 3,
            Category::Test => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Disease => "Disease",
            Category::Drug => "Drug",
            Category::Symptom => "Symptom",
            Category::Anatomy => "Anatomy",
            Category::Test => "Test",
        }
    }

    /// Human-facing color name.
    pub fn color_name(self) -> &'static str {
        match self {
            Category::Disease => "red",
            Category::Drug => "blue",
            Category::Symptom => "green",
            Category::Anatomy => "yellow",
            Category::Test => "purple",
        }
    }

    /// Hex color used for highlighted HTML spans.
    pub fn color_hex(self) -> &'static str {
        match self {
            Category::Disease => "#ff6b6b",
            Category::Drug => "#4dabf7",
            Category::Symptom => "#51cf66",
            Category::Anatomy => "#ffd43b",
            Category::Test => "#cc5de8",
        }
    }

    pub fn scoring(self) -> Scoring {
        let (base, per_char) = match self {
            Category::Disease => (85.0, 2.0),
            Category::Drug => (88.0, 1.5),
            Category::Symptom => (82.0, 1.8),
            Category::Anatomy => (90.0, 1.0),
            Category::Test => (87.0, 1.2),
        };
        Scoring { base, per_char }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LexiconError;

    /// Parses a category name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LexiconError::UnknownCategory(s.to_string()))
    }
}

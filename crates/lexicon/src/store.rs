//! The lexicon store: ordered surface forms per category.
//!
//! A [`Lexicon`] is plain data. It is built once (from the built-in
//! dictionary, a JSON document, or a [`LexiconBuilder`]) and then shared
//! read-only, typically behind an `Arc`, by any number of matchers.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "Disease": ["diabetes", "type 2 diabetes"],
//!   "Drug": ["metformin"]
//! }
//! ```
//!
//! Keys are category names (case-insensitive). Missing categories are empty,
//! unknown keys are rejected.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::ser::{Serialize, Serializer};

use crate::builtin;
use crate::category::Category;
use crate::error::LexiconError;

/// Category → ordered term list.
///
/// Terms are stored exactly as supplied. Substrings of other terms, duplicates
/// and mixed casing are all kept; the store never reorders or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    terms: [Vec<String>; Category::COUNT],
}

impl Lexicon {
    /// The compiled-in clinical dictionary.
    pub fn builtin() -> Self {
        let lists = [
            builtin::DISEASES,
            builtin::DRUGS,
            builtin::SYMPTOMS,
            builtin::ANATOMY,
            builtin::TESTS,
        ];
        Self {
            terms: lists.map(|list| list.iter().map(|t| (*t).to_string()).collect()),
        }
    }

    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Terms of one category, in lexicon order.
    pub fn terms(&self, category: Category) -> &[String] {
        &self.terms[category.index()]
    }

    /// Iterates `(category, terms)` in category declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.terms(category)))
    }

    /// Total number of terms across all categories.
    pub fn len(&self) -> usize {
        self.terms.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(Vec::is_empty)
    }

    /// Parses and validates a JSON lexicon document.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| LexiconError::Parse(e.to_string()))?;

        let mut builder = LexiconBuilder::default();
        for (key, terms) in raw {
            let category: Category = key.parse()?;
            builder = builder.terms(category, terms);
        }
        builder.build()
    }

    /// Reads a JSON lexicon document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LexiconError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }
}

impl Serialize for Lexicon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(category, terms)| (category.name(), terms)))
    }
}

impl From<Lexicon> for LexiconBuilder {
    /// Starts from an existing lexicon, e.g. to extend the built-in one.
    fn from(lexicon: Lexicon) -> Self {
        Self {
            terms: lexicon.terms,
        }
    }
}

/// Incremental lexicon construction with validation on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    terms: [Vec<String>; Category::COUNT],
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one term to `category`.
    pub fn term(mut self, category: Category, term: impl Into<String>) -> Self {
        self.terms[category.index()].push(term.into());
        self
    }

    /// Appends several terms to `category`, keeping their order.
    pub fn terms<I, S>(mut self, category: Category, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms[category.index()].extend(terms.into_iter().map(Into::into));
        self
    }

    /// Rejects blank terms; everything else is accepted verbatim.
    pub fn build(self) -> Result<Lexicon, LexiconError> {
        for category in Category::ALL {
            let list = &self.terms[category.index()];
            if let Some(index) = list.iter().position(|t| t.trim().is_empty()) {
                return Err(LexiconError::EmptyTerm { category, index });
            }
        }
        Ok(Lexicon { terms: self.terms })
    }
}

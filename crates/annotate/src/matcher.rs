//! Lexicon-driven entity matcher.
//!
//! Every lexicon term is compiled once into an escaped-literal,
//! case-insensitive [`Regex`]. Matching walks categories in declared order
//! and, within a category, terms in lexicon order; each term independently
//! reports all of its non-overlapping occurrences left to right.
//!
//! Terms never suppress each other. If `"diabetes"` and `"type 2 diabetes"`
//! are both in the lexicon, both report their occurrences even where the
//! spans overlap.

use std::sync::Arc;

use lexicon::{Category, Lexicon};
use regex::{Regex, RegexBuilder};

use crate::entity::{EntityMatch, EntityMatches};
use crate::error::AnnotateError;
use crate::scoring::Confidence;

#[derive(Debug, Clone)]
struct CompiledTerm {
    category: Category,
    pattern: Regex,
    confidence: Confidence,
}

/// Scans text for every term of an injected, read-only [`Lexicon`].
///
/// Construction does all the work that depends only on the lexicon
/// (pattern compilation, confidence scoring); [`find_matches`](Self::find_matches)
/// is then a pure function of the input text. The matcher is `Send + Sync`
/// and is meant to be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    lexicon: Arc<Lexicon>,
    compiled: Vec<CompiledTerm>,
}

impl EntityMatcher {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, AnnotateError> {
        let mut compiled = Vec::with_capacity(lexicon.len());
        for (category, terms) in lexicon.iter() {
            for term in terms {
                let pattern = RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| AnnotateError::InvalidTerm {
                        term: term.clone(),
                        reason: e.to_string(),
                    })?;
                compiled.push(CompiledTerm {
                    category,
                    pattern,
                    confidence: Confidence::for_term(category, term.chars().count()),
                });
            }
        }
        Ok(Self { lexicon, compiled })
    }

    /// Matcher over the built-in clinical dictionary.
    pub fn builtin() -> Result<Self, AnnotateError> {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Finds every occurrence of every lexicon term in `text`.
    ///
    /// Empty text yields an empty result.
    pub fn find_matches(&self, text: &str) -> EntityMatches {
        let mut matches = EntityMatches::default();
        if text.is_empty() {
            return matches;
        }

        let offsets = CharOffsets::new(text);
        for term in &self.compiled {
            for found in term.pattern.find_iter(text) {
                let (start, end) = (found.start(), found.end());
                matches.push(EntityMatch::new(
                    term.category,
                    found.as_str(),
                    (start, end),
                    (offsets.char_at(start), offsets.char_at(end)),
                    term.confidence,
                ));
            }
        }
        matches
    }
}

/// Byte offset → character offset translation for one input text.
enum CharOffsets {
    Ascii,
    Mapped(Vec<usize>),
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        if text.is_ascii() {
            CharOffsets::Ascii
        } else {
            CharOffsets::Mapped(text.char_indices().map(|(byte, _)| byte).collect())
        }
    }

    // `byte` is always a char boundary (regex match bounds); `text.len()`
    // maps to the total char count.
    fn char_at(&self, byte: usize) -> usize {
        match self {
            CharOffsets::Ascii => byte,
            CharOffsets::Mapped(starts) => match starts.binary_search(&byte) {
                Ok(idx) | Err(idx) => idx,
            },
        }
    }
}

//! MedNLP entity annotation engine.
//!
//! Deterministic, lexicon-based (gazetteer) recognition of medical terms in
//! free-form clinical text. There is no tokenization and no statistical
//! model: every lexicon term is searched for as a case-insensitive literal.
//!
//! ## What we do
//!
//! - Literal, case-insensitive term search with byte and character offsets
//! - Per-category confidence from term length, rounded and capped at 99.0
//! - Offset-ordered merge of matches back into the source text as markup
//! - Flat entity table and per-category counts
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no shared mutable state. The same text, lexicon and
//! config always give the same [`AnnotatedDocument`].
//!
//! ## Invariants worth knowing
//!
//! - `text[m.start()..m.end()] == m.text()` for every match
//! - Confidence is in `(0, 99.0]`, a multiple of 0.1
//! - Overlapping matches are kept and rendered back-to-back; the merger does
//!   not resolve them
//!
//! ```rust
//! use annotate::{annotate, AnnotateConfig, EntityMatcher, MarkupStyle};
//!
//! let matcher = EntityMatcher::builtin().unwrap();
//! let cfg = AnnotateConfig { markup: MarkupStyle::Bracket, ..Default::default() };
//! let doc = annotate("Started metformin for nausea.", &matcher, &cfg).unwrap();
//! assert_eq!(doc.total_entities(), 2);
//! assert!(doc.markup.contains("[metformin](Drug 99.0%)"));
//! ```

mod config;
mod document;
mod entity;
mod error;
mod matcher;
mod merge;
mod pipeline;
mod scoring;
mod table;

pub use crate::config::AnnotateConfig;
pub use crate::document::AnnotatedDocument;
pub use crate::entity::{EntityMatch, EntityMatches};
pub use crate::error::AnnotateError;
pub use crate::matcher::EntityMatcher;
pub use crate::merge::{
    merge_spans, render_markup, BracketSpanRenderer, HtmlSpanRenderer, MarkupStyle, SpanRenderer,
};
pub use crate::pipeline::annotate;
pub use crate::scoring::{confidence, Confidence, CONFIDENCE_CAP};
pub use crate::table::{build_table, summarize, EntityRow, TABLE_COLUMNS};

pub use lexicon::{Category, Lexicon, LexiconBuilder, LexiconError};

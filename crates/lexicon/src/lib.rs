//! MedNLP lexicon store.
//!
//! A fixed mapping from entity [`Category`] to an ordered list of literal
//! surface forms. This crate holds data only; matching, scoring and
//! rendering live in the `annotate` crate.
//!
//! ## What's here
//!
//! - [`Category`]: the closed set of entity categories, with display colors
//!   and scoring parameters
//! - [`Lexicon`]: per-category ordered term lists, the built-in dictionary and
//!   JSON loading
//! - [`LexiconBuilder`]: programmatic construction with validation
//!
//! ```rust
//! use lexicon::{Category, Lexicon};
//!
//! let lex = Lexicon::builtin();
//! assert!(lex.terms(Category::Drug).iter().any(|t| t == "metformin"));
//! ```

mod builtin;
mod category;
mod error;
mod store;

pub use crate::category::{Category, Scoring};
pub use crate::error::LexiconError;
pub use crate::store::{Lexicon, LexiconBuilder};

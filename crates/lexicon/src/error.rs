use thiserror::Error;

use crate::category::Category;

/// Errors raised while building or loading a lexicon.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon term #{index} in category {category} is empty")]
    EmptyTerm { category: Category, index: usize },
    #[error("unknown entity category: {0}")]
    UnknownCategory(String),
    #[error("failed to parse lexicon: {0}")]
    Parse(String),
    #[error("failed to read lexicon file: {0}")]
    Io(String),
}

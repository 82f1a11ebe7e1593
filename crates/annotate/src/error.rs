use thiserror::Error;

/// Errors that can occur while annotating text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("input text is empty or whitespace-only")]
    EmptyInput,
    #[error("lexicon term {term:?} cannot be compiled: {reason}")]
    InvalidTerm { term: String, reason: String },
}

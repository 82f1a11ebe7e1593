//! Configuration for the annotation pipeline.
//!
//! [`AnnotateConfig`] controls the boundary checks and output rendering of
//! [`annotate`](crate::annotate). Matching and scoring themselves are fixed
//! by the lexicon and are not configurable here.
//!
//! # Versioning
//!
//! `version` tags the annotation behavior a result was produced with and is
//! copied into every [`AnnotatedDocument`](crate::AnnotatedDocument). Version
//! 0 is reserved and rejected.
//!
//! # Examples
//!
//! ```rust
//! use annotate::{AnnotateConfig, MarkupStyle};
//!
//! let config = AnnotateConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.reject_blank_input);
//! assert_eq!(config.markup, MarkupStyle::Html);
//!
//! let plain = AnnotateConfig {
//!     markup: MarkupStyle::Bracket,
//!     ..Default::default()
//! };
//! assert!(plain.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AnnotateError;
use crate::merge::MarkupStyle;

/// Configuration for [`annotate`](crate::annotate).
///
/// Serializes as
///
/// ```json
/// {
///   "version": 1,
///   "reject_blank_input": true,
///   "markup": "html"
/// }
/// ```
///
/// Every field has a default, so partial documents deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnnotateConfig {
    /// Behavior version; must be >= 1.
    pub version: u32,

    /// If true, empty or whitespace-only input fails with
    /// [`AnnotateError::EmptyInput`] before matching runs.
    ///
    /// When false, blank input is annotated like any other text and simply
    /// produces no entities.
    ///
    /// # Default
    ///
    /// `true`
    pub reject_blank_input: bool,

    /// Span renderer used for the annotated markup.
    ///
    /// # Default
    ///
    /// [`MarkupStyle::Html`]
    pub markup: MarkupStyle,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            version: 1,
            reject_blank_input: true,
            markup: MarkupStyle::Html,
        }
    }
}

impl AnnotateConfig {
    pub fn validate(&self) -> Result<(), AnnotateError> {
        if self.version == 0 {
            return Err(AnnotateError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(AnnotateConfig::default().validate().is_ok());
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = AnnotateConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(AnnotateError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: AnnotateConfig = serde_json::from_str(r#"{"markup": "bracket"}"#).unwrap();
        assert_eq!(cfg.markup, MarkupStyle::Bracket);
        assert_eq!(cfg.version, 1);
        assert!(cfg.reject_blank_input);
    }
}

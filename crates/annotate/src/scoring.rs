use std::fmt;

use lexicon::{Category, Scoring};
use serde::ser::{Serialize, Serializer};

/// Upper bound applied after rounding.
pub const CONFIDENCE_CAP: f64 = 99.0;

/// A confidence score together with how it is displayed.
///
/// Categories whose formula has whole-number coefficients (Disease, Anatomy)
/// produce whole scores and display without a decimal (`93`), unless the cap
/// applied, in which case the capped value shows as `99.0`. All other scores
/// display with one decimal (`92.8`, `97.0`). Serializes as a plain number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confidence {
    value: f64,
    whole: bool,
}

impl Confidence {
    /// Score of a term of `term_len` characters in `category`.
    pub fn for_term(category: Category, term_len: usize) -> Self {
        let Scoring { base, per_char } = category.scoring();
        let raw = base + per_char * term_len as f64;
        let integral = base.fract() == 0.0 && per_char.fract() == 0.0;

        if integral && raw <= CONFIDENCE_CAP {
            Self {
                value: raw,
                whole: true,
            }
        } else {
            Self {
                value: round_one_decimal(raw).min(CONFIDENCE_CAP),
                whole: false,
            }
        }
    }

    pub fn value(self) -> f64 {
        self.value
    }
}

impl From<f64> for Confidence {
    /// An explicit score, displayed with one decimal.
    fn from(value: f64) -> Self {
        Self {
            value,
            whole: false,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole {
            write!(f, "{:.0}", self.value)
        } else {
            write!(f, "{:.1}", self.value)
        }
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

/// Confidence for a term of `term_len` characters in `category`.
///
/// `base + per_char * term_len`, rounded to one decimal, then capped at
/// [`CONFIDENCE_CAP`]. Depends on nothing but its two arguments.
pub fn confidence(category: Category, term_len: usize) -> f64 {
    Confidence::for_term(category, term_len).value()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulas_per_category() {
        assert_eq!(confidence(Category::Symptom, 6), 92.8);
        assert_eq!(confidence(Category::Symptom, 8), 96.4);
        assert_eq!(confidence(Category::Drug, 7), 98.5);
        assert_eq!(confidence(Category::Anatomy, 3), 93.0);
        assert_eq!(confidence(Category::Anatomy, 5), 95.0);
        assert_eq!(confidence(Category::Test, 6), 94.2);
        assert_eq!(confidence(Category::Test, 7), 95.4);
        assert_eq!(confidence(Category::Disease, 4), 93.0);
    }

    #[test]
    fn cap_applies_to_long_terms() {
        assert_eq!(confidence(Category::Disease, 8), CONFIDENCE_CAP);
        assert_eq!(confidence(Category::Drug, 9), CONFIDENCE_CAP);
        assert_eq!(confidence(Category::Symptom, 14), CONFIDENCE_CAP);
        assert_eq!(confidence(Category::Test, 10), CONFIDENCE_CAP);
        for category in Category::ALL {
            for len in 0..64 {
                let c = confidence(category, len);
                assert!(c > 0.0 && c <= CONFIDENCE_CAP, "{category} {len} -> {c}");
            }
        }
    }

    #[test]
    fn result_has_one_decimal() {
        for category in Category::ALL {
            for len in 1..20 {
                let c = confidence(category, len);
                let scaled = c * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn whole_number_formulas_display_without_decimal() {
        assert_eq!(Confidence::for_term(Category::Anatomy, 3).to_string(), "93");
        assert_eq!(Confidence::for_term(Category::Disease, 4).to_string(), "93");
        // reaching the cap exactly is not capping
        assert_eq!(Confidence::for_term(Category::Anatomy, 9).to_string(), "99");
        assert_eq!(Confidence::for_term(Category::Disease, 7).to_string(), "99");
    }

    #[test]
    fn capped_and_fractional_formulas_display_one_decimal() {
        assert_eq!(Confidence::for_term(Category::Disease, 8).to_string(), "99.0");
        assert_eq!(Confidence::for_term(Category::Anatomy, 16).to_string(), "99.0");
        assert_eq!(Confidence::for_term(Category::Symptom, 6).to_string(), "92.8");
        assert_eq!(Confidence::for_term(Category::Drug, 6).to_string(), "97.0");
        assert_eq!(Confidence::for_term(Category::Test, 6).to_string(), "94.2");
        assert_eq!(Confidence::from(99.0).to_string(), "99.0");
    }

    #[test]
    fn serializes_as_number() {
        let value = serde_json::to_value(Confidence::for_term(Category::Anatomy, 3)).unwrap();
        assert_eq!(value, 93.0);
    }
}

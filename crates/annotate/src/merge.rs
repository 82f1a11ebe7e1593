//! Offset-ordered span merging.
//!
//! [`merge_spans`] sorts matches by start offset (stable, so ties keep
//! emission order) and interleaves plain slices of the source text with
//! rendered spans. A cursor tracks the end of the last emitted span:
//!
//! ```text
//! for m in sorted(matches):
//!     emit text[cursor..m.start]   (empty when m.start <= cursor)
//!     emit span(m)
//!     cursor = m.end
//! emit text[cursor..]
//! ```
//!
//! Overlaps are not resolved. A match starting before the cursor is still
//! rendered in full, directly after the previous span, so overlapping
//! characters appear more than once in the output. The cursor is assigned,
//! not maxed, so a match nested inside an earlier, longer one moves it back.
//!
//! Plain text is passed through verbatim; escaping for the target medium is
//! the caller's business.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityMatch, EntityMatches};

/// Renders one highlighted span.
pub trait SpanRenderer {
    fn render_span(&self, entity: &EntityMatch, out: &mut String);
}

/// Inline `<span>` with the category background color and a
/// `"{category} ({confidence}%)"` tooltip.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSpanRenderer;

impl SpanRenderer for HtmlSpanRenderer {
    fn render_span(&self, entity: &EntityMatch, out: &mut String) {
        let category = entity.category();
        let _ = write!(
            out,
            "<span style=\"background-color: {}; padding: 2px 4px; border-radius: 3px; font-weight: bold;\" title=\"{} ({}%)\">{}</span>",
            category.color_hex(),
            category,
            entity.score(),
            entity.text(),
        );
    }
}

/// `[text](Category 99.0%)`, for terminals and plain-text logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketSpanRenderer;

impl SpanRenderer for BracketSpanRenderer {
    fn render_span(&self, entity: &EntityMatch, out: &mut String) {
        let _ = write!(
            out,
            "[{}]({} {}%)",
            entity.text(),
            entity.category(),
            entity.score(),
        );
    }
}

/// Built-in renderer selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    #[default]
    Html,
    Bracket,
}

impl std::str::FromStr for MarkupStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(MarkupStyle::Html),
            "bracket" | "text" => Ok(MarkupStyle::Bracket),
            _ => Err(format!("unknown markup style: {s}. Use html or bracket")),
        }
    }
}

/// Merges `matches` into `text` using `renderer`.
///
/// Offsets that do not fit `text` (matches produced from a different input)
/// are clamped to its length or, off a char boundary, degrade to empty
/// slices instead of panicking.
pub fn merge_spans<'a, I, R>(text: &str, matches: I, renderer: &R) -> String
where
    I: IntoIterator<Item = &'a EntityMatch>,
    R: SpanRenderer + ?Sized,
{
    let mut ordered: Vec<&EntityMatch> = matches.into_iter().collect();
    ordered.sort_by_key(|entity| entity.start());

    let mut out = String::with_capacity(text.len() + ordered.len() * 160);
    let mut last_end = 0;
    for entity in ordered {
        out.push_str(plain_slice(text, last_end, entity.start()));
        renderer.render_span(entity, &mut out);
        last_end = entity.end();
    }
    out.push_str(plain_slice(text, last_end, text.len()));
    out
}

/// Merges with one of the built-in renderers.
pub fn render_markup(text: &str, matches: &EntityMatches, style: MarkupStyle) -> String {
    match style {
        MarkupStyle::Html => merge_spans(text, matches.iter(), &HtmlSpanRenderer),
        MarkupStyle::Bracket => merge_spans(text, matches.iter(), &BracketSpanRenderer),
    }
}

// Half-open slice clamped to the text; `from >= to` is empty.
fn plain_slice(text: &str, from: usize, to: usize) -> &str {
    let to = to.min(text.len());
    if from < to {
        text.get(from..to).unwrap_or("")
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::Category;

    fn entity(category: Category, source: &str, start: usize, end: usize) -> EntityMatch {
        EntityMatch::new(category, &source[start..end], (start, end), (start, end), 99.0)
    }

    /// Renders just the matched text, so the output can be compared as text.
    struct Bare;

    impl SpanRenderer for Bare {
        fn render_span(&self, entity: &EntityMatch, out: &mut String) {
            out.push('<');
            out.push_str(entity.text());
            out.push('>');
        }
    }

    #[test]
    fn no_matches_returns_text_unchanged() {
        let text = "Patient <b>stable</b> & resting.\nNo complaints.";
        assert_eq!(merge_spans(text, std::iter::empty(), &HtmlSpanRenderer), text);
        assert_eq!(
            render_markup(text, &EntityMatches::default(), MarkupStyle::Bracket),
            text
        );
    }

    #[test]
    fn sorts_by_start_offset() {
        let text = "nausea and fever";
        let fever = entity(Category::Symptom, text, 11, 16);
        let nausea = entity(Category::Symptom, text, 0, 6);
        let out = merge_spans(text, [&fever, &nausea], &Bare);
        assert_eq!(out, "<nausea> and <fever>");
    }

    #[test]
    fn ties_keep_input_order() {
        let text = "chest CT";
        let chest = entity(Category::Anatomy, text, 0, 5);
        let chest_ct = entity(Category::Test, text, 0, 8);
        assert_eq!(merge_spans(text, [&chest, &chest_ct], &Bare), "<chest><chest CT>");
        assert_eq!(merge_spans(text, [&chest_ct, &chest], &Bare), "<chest CT><chest> CT");
    }

    #[test]
    fn overlapping_spans_duplicate_text() {
        let text = "type 2 diabetes mellitus";
        let diabetes = entity(Category::Disease, text, 7, 15);
        let type2 = entity(Category::Disease, text, 0, 15);
        let out = merge_spans(text, [&diabetes, &type2], &Bare);
        assert_eq!(out, "<type 2 diabetes><diabetes> mellitus");
    }

    #[test]
    fn nested_match_moves_cursor_back() {
        let text = "abdominal pain today";
        let outer = entity(Category::Symptom, text, 0, 14);
        let inner = entity(Category::Symptom, text, 10, 14);
        let early = entity(Category::Anatomy, text, 2, 5);
        let out = merge_spans(text, [&outer, &early, &inner], &Bare);
        // cursor: 14 -> 5 -> 14
        assert_eq!(out, "<abdominal pain><dom>inal <pain> today");
    }

    #[test]
    fn html_span_format() {
        let text = "on metformin";
        let m = EntityMatch::new(Category::Drug, "metformin", (3, 12), (3, 12), 99.0);
        let out = merge_spans(text, [&m], &HtmlSpanRenderer);
        assert_eq!(
            out,
            "on <span style=\"background-color: #4dabf7; padding: 2px 4px; border-radius: 3px; font-weight: bold;\" title=\"Drug (99.0%)\">metformin</span>"
        );
    }

    #[test]
    fn bracket_span_format() {
        let text = "mild nausea";
        let m = EntityMatch::new(Category::Symptom, "nausea", (5, 11), (5, 11), 92.8);
        assert_eq!(
            merge_spans(text, [&m], &BracketSpanRenderer),
            "mild [nausea](Symptom 92.8%)"
        );
    }

    #[test]
    fn out_of_range_offsets_do_not_panic() {
        let m = EntityMatch::new(Category::Test, "biopsy", (40, 46), (40, 46), 94.2);
        assert_eq!(merge_spans("short", [&m], &Bare), "short<biopsy>");
    }

    #[test]
    fn markup_style_parses() {
        assert_eq!("HTML".parse::<MarkupStyle>(), Ok(MarkupStyle::Html));
        assert_eq!("bracket".parse::<MarkupStyle>(), Ok(MarkupStyle::Bracket));
        assert!("xml".parse::<MarkupStyle>().is_err());
    }
}

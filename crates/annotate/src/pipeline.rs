use crate::config::AnnotateConfig;
use crate::document::AnnotatedDocument;
use crate::error::AnnotateError;
use crate::matcher::EntityMatcher;
use crate::merge::render_markup;
use crate::table::{build_table, summarize};

/// Main entry point. Matches `text` against the matcher's lexicon and
/// derives the markup, table and summary from the same match list.
pub fn annotate(
    text: &str,
    matcher: &EntityMatcher,
    cfg: &AnnotateConfig,
) -> Result<AnnotatedDocument, AnnotateError> {
    cfg.validate()?;

    // Blank input is rejected at the boundary; the matcher itself accepts it.
    if cfg.reject_blank_input && text.trim().is_empty() {
        return Err(AnnotateError::EmptyInput);
    }

    let matches = matcher.find_matches(text);
    let markup = render_markup(text, &matches, cfg.markup);
    let rows = build_table(&matches);
    let summary = summarize(&matches);

    tracing::debug!(
        text_len = text.len(),
        entities = matches.total(),
        markup_len = markup.len(),
        "annotated text"
    );

    Ok(AnnotatedDocument {
        matches,
        markup,
        rows,
        summary,
        annotate_version: cfg.version,
    })
}

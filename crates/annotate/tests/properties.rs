//! Property checks of the matcher and merger over the built-in lexicon.

use annotate::{
    annotate, build_table, confidence, merge_spans, AnnotateConfig, Category, EntityMatch,
    EntityMatcher, MarkupStyle, SpanRenderer, CONFIDENCE_CAP,
};

const TEXTS: &[&str] = &[
    "The patient was prescribed metformin 500mg twice daily for type 2 diabetes mellitus.",
    "Persistent DRY COUGH and mild angioedema of the lips. Blood Pressure 145/92 mmHg.",
    "Chest CT scan reveals a mass in the right upper lobe.\nNo pleural effusion.",
    "Nausea, nausea and more nausea; abdominal pain with fever and dizziness.",
    "Admitted to the ICU; creatinine and lactate ordered; ACE inhibitor held.",
    "Nothing clinical in this sentence at all.",
];

#[test]
fn every_contained_term_is_reported_with_formula_confidence() {
    let matcher = EntityMatcher::builtin().unwrap();
    for text in TEXTS {
        let lower = text.to_lowercase();
        let matches = matcher.find_matches(text);
        for (category, terms) in matcher.lexicon().iter() {
            for term in terms {
                if !lower.contains(&term.to_lowercase()) {
                    continue;
                }
                let expected = confidence(category, term.chars().count());
                let found = matches.for_category(category).iter().any(|m| {
                    m.text().eq_ignore_ascii_case(term) && (m.confidence() - expected).abs() < 1e-9
                });
                assert!(found, "{term:?} ({category}) missing in {text:?}");
            }
        }
    }
}

#[test]
fn offsets_slice_back_to_match_text() {
    let matcher = EntityMatcher::builtin().unwrap();
    for text in TEXTS {
        for m in matcher.find_matches(text).iter() {
            assert!(m.start() < m.end() && m.end() <= text.len());
            assert_eq!(&text[m.start()..m.end()], m.text());
            assert!(m.confidence() > 0.0 && m.confidence() <= CONFIDENCE_CAP);
        }
    }
}

#[test]
fn repeated_occurrences_are_all_reported() {
    let matcher = EntityMatcher::builtin().unwrap();
    let matches = matcher.find_matches(TEXTS[3]);
    let nausea = matches
        .for_category(Category::Symptom)
        .iter()
        .filter(|m| m.text().eq_ignore_ascii_case("nausea"))
        .count();
    assert_eq!(nausea, 3);
}

#[test]
fn markup_without_matches_is_identity() {
    let matcher = EntityMatcher::builtin().unwrap();
    let doc = annotate(TEXTS[5], &matcher, &AnnotateConfig::default()).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.markup, TEXTS[5]);
    assert!(build_table(&doc.matches).is_empty());
}

#[test]
fn html_markup_carries_color_and_tooltip() {
    let matcher = EntityMatcher::builtin().unwrap();
    let doc = annotate(TEXTS[4], &matcher, &AnnotateConfig::default()).unwrap();
    assert!(doc.markup.contains("background-color: #ffd43b"));
    assert!(doc.markup.contains("title=\"Anatomy (93%)\">ICU</span>"));
    assert!(doc.markup.contains("title=\"Test (95.4%)\">lactate</span>"));
    assert!(doc.markup.ends_with(" held."));
}

#[test]
fn line_breaks_pass_through() {
    let matcher = EntityMatcher::builtin().unwrap();
    let cfg = AnnotateConfig {
        markup: MarkupStyle::Bracket,
        ..Default::default()
    };
    let doc = annotate(TEXTS[2], &matcher, &cfg).unwrap();
    assert!(doc.markup.contains("(Anatomy 99.0%).\nNo [pleural]"));
}

#[test]
fn overlapping_builtin_terms_duplicate_characters() {
    struct Bare;
    impl SpanRenderer for Bare {
        fn render_span(&self, entity: &EntityMatch, out: &mut String) {
            out.push_str(entity.text());
        }
    }

    let matcher = EntityMatcher::builtin().unwrap();
    let text = TEXTS[0];
    let matches = matcher.find_matches(text);
    let rendered = merge_spans(text, matches.iter(), &Bare);
    assert!(rendered.len() > text.len());
    assert!(rendered.matches("diabetes").count() > text.matches("diabetes").count());
}

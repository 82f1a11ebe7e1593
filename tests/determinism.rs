use std::sync::Arc;
use std::thread;

use mednlp::{analyze, Annotator, EntityMatcher, Lexicon, Sample};

#[test]
fn repeated_runs_are_identical() {
    for sample in Sample::ALL {
        let first = analyze(sample.text()).expect("first run");
        let second = analyze(sample.text()).expect("second run");
        assert_eq!(first, second, "{sample}");
    }
}

#[test]
fn fresh_matcher_agrees_with_shared_default() {
    let fresh = EntityMatcher::new(Arc::new(Lexicon::builtin())).unwrap();
    let annotator = Annotator::new(Arc::new(fresh), Default::default());
    for sample in Sample::ALL {
        let ours = annotator.annotate(sample.text()).unwrap();
        let shared = analyze(sample.text()).unwrap();
        assert_eq!(ours, shared);
    }
}

#[test]
fn concurrent_annotation_matches_sequential() {
    let annotator = Arc::new(Annotator::builtin().unwrap());
    let expected: Vec<_> = Sample::ALL
        .iter()
        .map(|s| annotator.annotate(s.text()).unwrap())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let annotator = Arc::clone(&annotator);
            thread::spawn(move || {
                let sample = Sample::ALL[i % Sample::ALL.len()];
                (i % Sample::ALL.len(), annotator.annotate(sample.text()).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (idx, doc) = handle.join().expect("worker panicked");
        assert_eq!(doc, expected[idx]);
    }
}

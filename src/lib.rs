//! Workspace umbrella crate for the MedNLP entity annotation engine.
//!
//! This crate stitches the lexicon store and the annotation engine together
//! so callers can go from raw clinical text to matches, markup and table rows
//! with a single call, and adds the pieces that sit around the pure core:
//! a process-wide default matcher, YAML configuration, demo samples and a
//! metrics observer hook.

pub mod config;
pub mod samples;

pub use annotate::{
    annotate, build_table, confidence, merge_spans, render_markup, summarize, Confidence,
    AnnotateConfig, AnnotateError, AnnotatedDocument, BracketSpanRenderer, EntityMatch,
    EntityMatcher, EntityMatches, EntityRow, HtmlSpanRenderer, MarkupStyle, SpanRenderer,
    CONFIDENCE_CAP, TABLE_COLUMNS,
};
pub use lexicon::{Category, Lexicon, LexiconBuilder, LexiconError, Scoring};

pub use crate::config::{ConfigLoadError, MednlpConfig};
pub use crate::samples::Sample;

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Errors that can occur while building an annotator or annotating text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Lexicon(LexiconError),
    Annotate(AnnotateError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Lexicon(err) => write!(f, "lexicon failure: {err}"),
            PipelineError::Annotate(err) => write!(f, "annotation failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Lexicon(err) => Some(err),
            PipelineError::Annotate(err) => Some(err),
        }
    }
}

impl From<LexiconError> for PipelineError {
    fn from(value: LexiconError) -> Self {
        PipelineError::Lexicon(value)
    }
}

impl From<AnnotateError> for PipelineError {
    fn from(value: AnnotateError) -> Self {
        PipelineError::Annotate(value)
    }
}

/// Metrics observer for annotation calls.
pub trait AnnotationMetrics: Send + Sync {
    /// `entities` is the number of matches produced (0 on error).
    fn record_annotate(&self, latency: Duration, result: Result<(), AnnotateError>, entities: usize);
}

/// Install or clear the global annotation metrics recorder.
pub fn set_annotation_metrics(recorder: Option<Arc<dyn AnnotationMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AnnotationMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn AnnotationMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn AnnotationMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn AnnotationMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record(self, result: &Result<AnnotatedDocument, AnnotateError>) {
        let (outcome, entities) = match result {
            Ok(doc) => (Ok(()), doc.total_entities()),
            Err(err) => (Err(err.clone()), 0),
        };
        self.recorder
            .record_annotate(self.start.elapsed(), outcome, entities);
    }
}

/// Matcher over the built-in dictionary, built on first use and shared for
/// the life of the process.
pub fn default_matcher() -> Result<Arc<EntityMatcher>, PipelineError> {
    static DEFAULT: OnceLock<Result<Arc<EntityMatcher>, AnnotateError>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| EntityMatcher::builtin().map(Arc::new))
        .clone()
        .map_err(PipelineError::from)
}

/// A matcher paired with the config it annotates with.
#[derive(Debug, Clone)]
pub struct Annotator {
    matcher: Arc<EntityMatcher>,
    config: AnnotateConfig,
}

impl Annotator {
    pub fn new(matcher: Arc<EntityMatcher>, config: AnnotateConfig) -> Self {
        Self { matcher, config }
    }

    /// Built-in dictionary with the default config.
    pub fn builtin() -> Result<Self, PipelineError> {
        Ok(Self::new(default_matcher()?, AnnotateConfig::default()))
    }

    /// Builds the lexicon described by `config` and compiles a matcher for it.
    pub fn from_config(config: &MednlpConfig) -> Result<Self, PipelineError> {
        let annotate_cfg = config.annotate.to_annotate_config();
        annotate_cfg.validate()?;

        let matcher = if config.lexicon.path.is_none() && config.lexicon.extra.is_empty() {
            default_matcher()?
        } else {
            let lexicon = config.lexicon.build_lexicon()?;
            tracing::info!(terms = lexicon.len(), "compiled custom lexicon");
            Arc::new(EntityMatcher::new(Arc::new(lexicon))?)
        };

        Ok(Self::new(matcher, annotate_cfg))
    }

    pub fn matcher(&self) -> &Arc<EntityMatcher> {
        &self.matcher
    }

    pub fn config(&self) -> &AnnotateConfig {
        &self.config
    }

    /// Annotates `text`, reporting to the installed metrics recorder.
    pub fn annotate(&self, text: &str) -> Result<AnnotatedDocument, PipelineError> {
        let span = MetricsSpan::start();
        let result = annotate(text, &self.matcher, &self.config);
        if let Some(span) = span {
            span.record(&result);
        }
        result.map_err(PipelineError::from)
    }
}

/// Annotates `text` against the built-in dictionary with the default config.
pub fn analyze(text: &str) -> Result<AnnotatedDocument, PipelineError> {
    analyze_with_config(text, &AnnotateConfig::default())
}

/// Annotates `text` against the built-in dictionary with an explicit config.
pub fn analyze_with_config(
    text: &str,
    cfg: &AnnotateConfig,
) -> Result<AnnotatedDocument, PipelineError> {
    Annotator::new(default_matcher()?, cfg.clone()).annotate(text)
}

/// Annotates one of the bundled demo texts.
pub fn analyze_sample(sample: Sample) -> Result<AnnotatedDocument, PipelineError> {
    analyze(sample.text())
}

use crate::config::ServerConfig;
use crate::error::ServerResult;
use annotate::{AnnotatedDocument, MarkupStyle};
use dashmap::DashMap;
use mednlp::{Annotator, MednlpConfig, PipelineError};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,

    /// Compiled matcher and annotation settings (shared across requests)
    pub annotator: Arc<Annotator>,
}

impl ServerState {
    /// Create new server state, compiling the configured lexicon
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;

        let mut mednlp_cfg = match &config.mednlp_config {
            Some(path) => MednlpConfig::from_file(path)?,
            None => MednlpConfig::default(),
        };
        if let Some(path) = &config.lexicon_path {
            mednlp_cfg.lexicon.path = Some(path.clone());
        }

        let annotator = Annotator::from_config(&mednlp_cfg)?;
        tracing::info!(
            terms = annotator.matcher().lexicon().len(),
            "lexicon loaded"
        );

        Ok(Self::with_annotator(config, annotator))
    }

    pub fn with_annotator(config: ServerConfig, annotator: Annotator) -> Self {
        Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            annotator: Arc::new(annotator),
        }
    }

    /// Annotate `text`, optionally overriding the configured markup style
    pub fn annotate(
        &self,
        text: &str,
        markup: Option<MarkupStyle>,
    ) -> Result<AnnotatedDocument, PipelineError> {
        match markup {
            Some(style) if style != self.annotator.config().markup => {
                let mut cfg = self.annotator.config().clone();
                cfg.markup = style;
                Annotator::new(Arc::clone(self.annotator.matcher()), cfg).annotate(text)
            }
            _ => self.annotator.annotate(text),
        }
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::extraction::{DocumentExtractor, TextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no analysis state; every request builds its own report.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume text extractor. Default: DocumentExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            extractor: Arc::new(DocumentExtractor),
        }
    }
}

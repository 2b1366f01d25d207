use std::sync::Arc;

use crate::config::Config;
use crate::filters::FilterExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Filter extraction fallback chain: remote semantic parser when
    /// configured, then the local keyword parser.
    pub extractor: Arc<FilterExtractor>,
    pub config: Config,
}

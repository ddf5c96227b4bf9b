use std::sync::Arc;

use crate::config::Config;
use crate::cv::extract::TextExtractor;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every collaborator is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Default: `LlmClient` (Gemini). Tests substitute a stub.
    pub generator: Arc<dyn TextGenerator>,
    /// Default: `DocxTextExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Config,
}

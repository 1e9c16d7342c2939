use std::sync::Arc;

use crate::llm_client::GeminiClient;
use crate::store::{ApplicationStore, JobStore};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Handlers reach the record store only through the trait objects, so the
/// backing storage can change without touching them.
#[derive(Clone)]
pub struct AppState {
    pub applications: Arc<dyn ApplicationStore>,
    pub jobs: Arc<dyn JobStore>,
    pub gemini: GeminiClient,
}

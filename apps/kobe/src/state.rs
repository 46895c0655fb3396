use std::sync::Arc;

use crate::prompts::PromptAssembler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fixed-persona assembler; owns the context builder and its cache.
    pub assembler: Arc<PromptAssembler>,
}

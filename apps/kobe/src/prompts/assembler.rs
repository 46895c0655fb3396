//! Prompt Assembler — context block in, finished system prompt out.

use std::sync::Arc;

use tracing::debug;

use crate::context::{ContextBlock, ContextBuilder};
use crate::errors::AppError;
use crate::prompts::PromptConfig;

/// Produces the system prompt for one fixed `PromptConfig`.
///
/// The config is chosen once at startup; nothing per-request can change
/// which table or persona is used.
#[derive(Clone)]
pub struct PromptAssembler {
    builder: Arc<ContextBuilder>,
    config: PromptConfig,
}

impl PromptAssembler {
    pub fn new(builder: Arc<ContextBuilder>, config: PromptConfig) -> Self {
        Self { builder, config }
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn builder(&self) -> &ContextBuilder {
        &self.builder
    }

    pub async fn build_context(&self) -> Result<ContextBlock, AppError> {
        self.builder
            .build_context(
                self.config.table_reference,
                self.config.description,
                self.config.metadata_query,
            )
            .await
    }

    /// Returns the full system prompt: the persona template with the
    /// context block substituted in, verbatim.
    pub async fn build_system_prompt(&self) -> Result<String, AppError> {
        let block = self.build_context().await?;
        let prompt = self.config.persona.template().render(block.as_str())?;

        debug!(
            "Rendered {} system prompt ({} bytes)",
            self.config.persona,
            prompt.len()
        );
        Ok(prompt)
    }
}

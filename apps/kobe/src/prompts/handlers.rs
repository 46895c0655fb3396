use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::prompts::Persona;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SystemPromptResponse {
    pub persona: Persona,
    pub table: &'static str,
    pub prompt: String,
}

/// GET /api/v1/system-prompt
pub async fn handle_get_system_prompt(
    State(state): State<AppState>,
) -> Result<Json<SystemPromptResponse>, AppError> {
    let prompt = state.assembler.build_system_prompt().await?;
    let config = state.assembler.config();
    Ok(Json(SystemPromptResponse {
        persona: config.persona,
        table: config.table_reference,
        prompt,
    }))
}

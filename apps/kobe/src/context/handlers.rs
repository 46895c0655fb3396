use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContextResponse {
    pub table: &'static str,
    pub column_count: usize,
    pub metric_count: Option<usize>,
    pub context: String,
    pub generated_at: DateTime<Utc>,
}

/// GET /api/v1/context
pub async fn handle_get_context(
    State(state): State<AppState>,
) -> Result<Json<ContextResponse>, AppError> {
    let block = state.assembler.build_context().await?;
    Ok(Json(ContextResponse {
        table: state.assembler.config().table_reference,
        column_count: block.column_count,
        metric_count: block.metric_count,
        context: block.text,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/context/refresh
/// Drops the memoized context so the next request re-reads the warehouse.
pub async fn handle_refresh_context(State(state): State<AppState>) -> StatusCode {
    state.assembler.builder().invalidate().await;
    StatusCode::NO_CONTENT
}

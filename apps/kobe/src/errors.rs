use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::context::table_ref::TableRefError;
use crate::prompts::TemplateError;
use crate::warehouse::WarehouseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid table reference: {0}")]
    InvalidTableReference(#[from] TableRefError),

    #[error("Warehouse error: {0}")]
    Warehouse(#[from] WarehouseError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidTableReference(e) => {
                tracing::error!("Invalid table reference: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    e.to_string(),
                )
            }
            AppError::Warehouse(e) => {
                tracing::error!("Warehouse error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "WAREHOUSE_ERROR",
                    "The data warehouse query failed".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    e.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ref_error_maps_to_configuration_error() {
        let err: AppError = TableRefError::EmptySegment("NBA..X".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_warehouse_error_maps_to_bad_gateway() {
        let err: AppError = WarehouseError::MissingColumn("DEFINITION".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}

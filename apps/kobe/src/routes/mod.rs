pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::context::handlers as context_handlers;
use crate::prompts::handlers as prompt_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/system-prompt",
            get(prompt_handlers::handle_get_system_prompt),
        )
        .route("/api/v1/context", get(context_handlers::handle_get_context))
        .route(
            "/api/v1/context/refresh",
            post(context_handlers::handle_refresh_context),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::context::ContextBuilder;
    use crate::prompts::{Persona, PromptAssembler};
    use crate::warehouse::fake::FakeWarehouse;

    fn app(wh: Arc<FakeWarehouse>) -> Router {
        let builder = Arc::new(ContextBuilder::new(wh));
        let assembler = PromptAssembler::new(builder, Persona::RegularSeason.prompt_config());
        build_router(AppState {
            assembler: Arc::new(assembler),
        })
    }

    fn demo_warehouse() -> Arc<FakeWarehouse> {
        Arc::new(
            FakeWarehouse::new()
                .with_columns(&[("PTS", "NUMBER"), ("AST", "NUMBER")])
                .with_metrics("DEFINITIONS", &[("PSP", "Scoring metric.")]),
        )
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(demo_warehouse()), "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_system_prompt_endpoint() {
        let (status, body) = send(app(demo_warehouse()), "GET", "/api/v1/system-prompt").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persona"], "regular_season");
        assert_eq!(body["table"], "NBA.PUBLIC.REGULAR_SZN");
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("<tableName> NBA.PUBLIC.REGULAR_SZN </tableName>"));
        assert!(prompt.contains("- PSP: Scoring metric."));
    }

    #[tokio::test]
    async fn test_context_endpoint_reports_counts() {
        let (status, body) = send(app(demo_warehouse()), "GET", "/api/v1/context").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["column_count"], 2);
        assert_eq!(body["metric_count"], 1);
    }

    #[tokio::test]
    async fn test_refresh_forces_refetch() {
        let wh = demo_warehouse();
        let router = app(wh.clone());

        send(router.clone(), "GET", "/api/v1/context").await;
        send(router.clone(), "GET", "/api/v1/context").await;
        assert_eq!(wh.calls(), 2);

        let (status, _) = send(router.clone(), "POST", "/api/v1/context/refresh").await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        send(router, "GET", "/api/v1/context").await;
        assert_eq!(wh.calls(), 4);
    }

    #[tokio::test]
    async fn test_warehouse_failure_returns_bad_gateway() {
        let wh = Arc::new(FakeWarehouse::new().with_failure("information_schema", "timeout"));
        let (status, body) = send(app(wh), "GET", "/api/v1/system-prompt").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "WAREHOUSE_ERROR");
    }
}

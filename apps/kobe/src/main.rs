mod config;
mod context;
mod db;
mod errors;
mod prompts;
mod routes;
mod state;
mod warehouse;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::context::ContextBuilder;
use crate::db::create_pool;
use crate::prompts::PromptAssembler;
use crate::routes::build_router;
use crate::state::AppState;
use crate::warehouse::PgWarehouse;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KOBE prompt service v{}", env!("CARGO_PKG_VERSION"));

    // Initialize warehouse
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    let warehouse = Arc::new(PgWarehouse::new(pool));

    // Build the assembler for the configured persona
    let prompt_config = config.persona.prompt_config();
    info!(
        "Persona: {} (table {})",
        prompt_config.persona, prompt_config.table_reference
    );
    let builder = Arc::new(ContextBuilder::new(warehouse));
    let assembler = Arc::new(PromptAssembler::new(builder, prompt_config));

    // Render once up front: a prompt that cannot be built means no sessions can start
    let prompt = assembler
        .build_system_prompt()
        .await
        .context("Failed to build the initial system prompt")?;
    info!("System prompt ready ({} bytes)", prompt.len());

    let state = AppState { assembler };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

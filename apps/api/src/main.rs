mod config;
mod editor;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod state;
mod suggestion;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, TextBackend};
use crate::models::document::Document;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;
use crate::suggestion::SuggestionGateway;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EuroCV API v{}", env!("CARGO_PKG_VERSION"));

    // Suggestion backend is optional; without a key the gateway answers with a placeholder
    let backend: Option<Arc<dyn TextBackend>> = match &config.api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.suggestion_timeout)?;
            info!(
                "LLM client initialized (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.suggestion_timeout
            );
            Some(Arc::new(client))
        }
        None => {
            warn!("API_KEY is not set; suggestions will return a placeholder");
            None
        }
    };

    let session = session::spawn(
        Session::new(Document::default(), config.default_template),
        SuggestionGateway::new(backend),
    );

    let state = AppState {
        session,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

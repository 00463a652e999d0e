mod config;
mod errors;
mod llm_client;
mod recommendations;
mod routes;
mod state;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommendations::fetcher::Recommender;
use crate::routes::build_router;
use crate::state::AppState;
use crate::view::timers::{spawn_animation_timers, SharedView};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting use-case finder v{}", env!("CARGO_PKG_VERSION"));

    if std::env::var(llm_client::API_KEY_ENV).is_err() {
        info!(
            "{} is not set; searches will be served from mock data",
            llm_client::API_KEY_ENV
        );
    }

    let llm = LlmClient::new(config.openai_base_url.clone());
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        llm.base_url()
    );

    let view = SharedView::default();
    let _timers = spawn_animation_timers(view.clone());

    let state = AppState {
        recommender: Recommender::new(Arc::new(llm)),
        view,
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

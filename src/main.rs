//! BNPL Coach HTTP server entry point.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bnpl_coach::adapters::events::InMemoryFlowEventPublisher;
use bnpl_coach::adapters::http::{api_router, cors_layer, AppState};
use bnpl_coach::adapters::storage::InMemoryFlowStore;
use bnpl_coach::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);
    info!(
        environment = ?config.server.environment,
        "configuration loaded"
    );

    let state = AppState::new(
        Arc::new(InMemoryFlowStore::new()),
        Arc::new(InMemoryFlowEventPublisher::new()),
        config.simulation.clone(),
    );

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server.cors_origins_list()));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub mod handlers;
mod types;

pub use types::*;

use crate::{
    Result,
    cache::InferenceCache,
    config::Config,
    engine::RemoteEngine,
    gateway::InferenceGateway,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(gateway: InferenceGateway) -> Router {
    let app_state = handlers::AppState { gateway };

    Router::new()
        .route("/infer/hash", post(handlers::infer_by_hash))
        .route("/infer/content", post(handlers::infer_by_content))
        .route("/cache/stats", get(handlers::cache_stats))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    info!("Using inference engine at {}", config.engine.base_url);
    let engine = RemoteEngine::new(config.engine.clone())?;

    let gateway = InferenceGateway::new(Arc::new(engine), Arc::new(InferenceCache::new()))
        .with_cache_enabled(!config.cache.disabled);
    if config.cache.disabled {
        info!("Result cache disabled");
    }

    let app = router(gateway);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

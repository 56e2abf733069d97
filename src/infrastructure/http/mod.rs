pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

pub use request_id::request_id_middleware;

/// Build the application router with all routes configured
pub fn build_router(config: &Config, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/api/languages", get(TtsController::list_languages))
        .route("/api/interface", get(TtsController::get_interface))
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .route("/api/tts/audio/:file_name", get(TtsController::get_audio))
        .with_state(tts_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .merge(tts_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        );

    // The front-end is served from another origin while developing
    if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

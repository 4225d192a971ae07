use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, speech::SpeechController};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with all routes and layers
pub fn create_app(config: &Config, speech_controller: Arc<SpeechController>) -> Router {
    // Synthesis routes
    let speech_routes = Router::new()
        .route("/api/tts", post(SpeechController::synthesize_text))
        .route("/api/youtube", post(SpeechController::synthesize_youtube))
        .route("/api/voices", get(SpeechController::list_voices))
        .with_state(speech_controller.clone());

    // PDF uploads get their own body limit
    let upload_routes = Router::new()
        .route("/api/pdf", post(SpeechController::synthesize_pdf))
        .with_state(speech_controller)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes));

    Router::new()
        .route("/health", get(health::health))
        .route("/audio", get(SpeechController::legacy_audio))
        .merge(speech_routes)
        .merge(upload_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer(config)),
        )
}

/// CORS for the configured frontend origins; credentials are allowed, so
/// methods and headers are mirrored instead of wildcarded.
fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Start the HTTP server and serve until a shutdown signal arrives
pub async fn start_http_server(
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
) -> anyhow::Result<()> {
    let app = create_app(&config, speech_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Wait for `SIGINT` or `SIGTERM`
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}

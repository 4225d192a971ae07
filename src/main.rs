use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use edudub_backend::controllers::speech::SpeechController;
use edudub_backend::domain::speech::SpeechService;
use edudub_backend::infrastructure::config::{Config, LogFormat};
use edudub_backend::infrastructure::http::start_http_server;
use edudub_backend::infrastructure::repositories::{
    LopdfDocumentRepository, MurfSpeechRepository, YoutubeTranscriptRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting EduDub Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        speech_api = %config.speech_api_base_url,
        default_voice = %config.default_voice,
        timeout_secs = config.provider_timeout_secs,
        allowed_origins = ?config.allowed_origins,
        "Speech provider configured"
    );
    if config.is_development() && config.pdf_page_separator.is_empty() {
        tracing::debug!("PDF pages are concatenated without a separator (set PDF_PAGE_SEPARATOR to change)");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Provider adapters
    let speech_repo = Arc::new(MurfSpeechRepository::from_config(&config)?);
    let transcript_repo = Arc::new(YoutubeTranscriptRepository::from_config(&config)?);
    let document_repo = Arc::new(LopdfDocumentRepository::new());

    // 2. Service
    let speech_service = Arc::new(SpeechService::new(
        speech_repo,
        transcript_repo,
        document_repo,
        config.default_voice.clone(),
        config.pdf_page_separator.clone(),
    ));

    // 3. Controller
    let speech_controller = Arc::new(SpeechController::new(
        speech_service,
        config.max_upload_bytes,
    ));

    // Start HTTP server with all routes
    start_http_server(config, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "edudub_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

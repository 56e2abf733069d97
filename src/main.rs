use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use interlink_tts::domain::tts::LanguageCatalog;
use interlink_tts::infrastructure::config::{Config, LogFormat};
use interlink_tts::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Interlink TTS on {}:{}",
        config.host,
        config.port
    );

    // Load the language catalog; an unusable catalog stops the process here
    let catalog = match &config.languages_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading language catalog from file");
            LanguageCatalog::from_json_file(path)
        }
        None => Ok(LanguageCatalog::builtin()),
    }
    .map_err(|e| {
        tracing::error!(error = %e, "Invalid language catalog, refusing to start");
        e
    })?;
    tracing::info!(
        languages = catalog.len(),
        default_language = %catalog.first().code,
        "Language catalog loaded"
    );

    // Prepare the artifact directory
    tokio::fs::create_dir_all(&config.output_dir).await?;
    tracing::info!(output_dir = %config.output_dir.display(), "Audio output directory ready");

    let catalog = Arc::new(catalog);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the synthesis engine
    tracing::info!(espeak_bin = %config.espeak_bin.display(), "Instantiating espeak-ng engine...");
    let tts_repo = Arc::new(interlink_tts::infrastructure::repositories::EspeakTtsRepository::new(
        catalog.clone(),
        config.espeak_bin.clone(),
        config.output_dir.clone(),
        config.espeak_words_per_minute,
    ));

    // 2. Instantiate services (inject catalog and engine)
    tracing::info!("Instantiating services...");
    let tts_service = Arc::new(interlink_tts::domain::tts::TtsService::new(
        catalog.clone(),
        tts_repo,
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(interlink_tts::controllers::tts::TtsController::new(
        tts_service,
        config.output_dir.clone(),
    ));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "interlink_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "interlink_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

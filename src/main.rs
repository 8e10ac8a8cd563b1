// src/main.rs

use std::{net::SocketAddr, sync::Arc};

use dotenvy::dotenv;
use educopilot::config::Config;
use educopilot::routes;
use educopilot::services::CopilotService;
use educopilot::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let service = CopilotService::from_config(&config);

    // Make sure the store file exists before the first request reads it
    if let Err(e) = service.store().ensure_initialized().await {
        tracing::error!("Failed to initialize store at {}: {}", config.database_file.display(), e);
        std::process::exit(1);
    }
    match service.list_students().await {
        Ok(students) => tracing::info!(
            "Store ready at {} ({} students)",
            config.database_file.display(),
            students.len()
        ),
        Err(e) => tracing::warn!("Could not read students from store: {}", e),
    }
    tracing::info!(
        "Using model {} (stage delay {:?})",
        config.llm_model_name,
        config.stage_delay
    );

    let state = AppState {
        service: Arc::new(service),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}

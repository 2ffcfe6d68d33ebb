//! Healthline demo server.
//!
//! Initializes tracing, loads configuration from a TOML file, builds the
//! router around a single health store, and serves until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthline::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use healthline::http::start_server;
use healthline::routes::create_router;
use healthline::state::AppState;

/// Healthline: serve process health status over HTTP
#[derive(Parser, Debug)]
#[command(name = "healthline", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "healthline=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(config = %args.config, "Loaded configuration");
    tracing::info!(
        path = %config.health.path,
        json_path = %config.health.json_path,
        toggle_path = ?config.health.toggle_path,
        use_json = config.health.use_json,
        "Health endpoints configured"
    );

    let state = AppState::new(config.clone());
    let health = state.health.clone();
    let app = create_router(state);

    start_server(app, &config, health).await?;

    Ok(())
}

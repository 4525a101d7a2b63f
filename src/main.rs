//! MarketHub server binary.

use markethub_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("MARKETHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    tracing::info!(env = %env, "Starting MarketHub");

    if let Err(e) = markethub_api::run_server(config).await {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber from the logging configuration.
fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

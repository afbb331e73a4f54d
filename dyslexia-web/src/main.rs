//! Dyslexia Screening - Web Server Entry Point

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dyslexia_web::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dyslexia_web=debug,dyslexia_core=info,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Dyslexia Detection web server starting ({})", config.environment);
    if config.model_path.is_file() {
        tracing::info!("Model: {}", config.model_path.display());
    } else {
        tracing::warn!(
            "Model not found at {} - predictions will fail until dyslexia-train is run",
            config.model_path.display()
        );
    }

    let addr = config.socket_addr();
    let app = create_router(AppState { config });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use anyhow::{Context, Result};
use text_translator_widget::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("text_translator_widget=info".parse()?),
        )
        .init();

    info!("Starting text translator widget");

    // Load configuration from environment
    let config = Config::from_env()?;
    let addr = config.bind_addr();
    info!(
        "Translation endpoint: {} (defaults {} -> {})",
        config.translation_api_url, config.default_source_language, config.default_target_language
    );

    let app = server::router(server::AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

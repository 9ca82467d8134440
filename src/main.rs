use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_quotes::{AlphaClient, ServerConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = ServerConfig::from_env();
    let client = AlphaClient::builder().api_key(cfg.api_key.clone()).build()?;
    if client.key_is_unconfigured() {
        warn!("ALPHA_VANTAGE_API_KEY is not set; US quote requests will fail until it is");
    }

    let app = server::router(client, &cfg.public_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .with_context(|| format!("failed to bind port {}", cfg.port))?;
    info!(
        "portfolio tracker backend (US = Alpha Vantage, IT = manual) listening on http://localhost:{}",
        cfg.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}

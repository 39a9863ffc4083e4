//! Query service binary
//!
//! Run with: cargo run -p askdocs --bin askdocs-server

use askdocs::{config::ServiceConfig, server::ChatServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "askdocs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.openai.embed_model);
    tracing::info!("  - Generation model: {}", config.openai.chat_model);
    tracing::info!("  - Vector index: {}", config.pinecone.index);
    if config.server.cors_wildcard() {
        tracing::warn!("CORS allows all origins; set ALLOWED_ORIGINS in production");
    }

    // Fails here if the index is unreachable
    let server = ChatServer::new(config).await?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("\nEndpoints:");
    println!("  GET  /     - liveness");
    println!("  POST /chat - ask a question");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}

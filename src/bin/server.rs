//! Docuchat server - document ingestion and question answering over HTTP.

use clap::Parser;
use docuchat::retrieval::EmbeddingService;
use docuchat::server::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "docuchat-server", about = "Docuchat HTTP server")]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port
    #[arg(long, short, default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    info!("{} v{} starting", docuchat::NAME, docuchat::VERSION);

    // Load the embedding model (downloads on first run)
    let embedder = EmbeddingService::new()?;
    info!(dimensions = embedder.dimensions(), "embedding model ready");

    // All state is in-memory; nothing survives a restart.
    let state = AppState::new(Arc::new(embedder));
    let app = build_router(state);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Docuchat listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Agreement API server entry point

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use agreement_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agreement_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let state = Arc::new(AppState::new());
    let app = build_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting agreement API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

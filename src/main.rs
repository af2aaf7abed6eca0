use dotenvy::dotenv;
use std::io;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::database::ActivityRegistry;
use activity_signup::web::app_router;

#[tokio::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,activity_signup=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let registry = ActivityRegistry::seeded();
    info!(
        activities = registry.list().len(),
        static_dir = %config.static_dir.display(),
        "registry seeded"
    );

    let app = app_router(registry, &config.static_dir);

    let addr = config
        .bind_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);

    axum::serve(listener, app).await
}

//! Catalog web server binary.
//!
//! Loads the movie catalog exactly once, then serves the filter API and
//! the demo page. A missing or malformed catalog file aborts startup
//! before the listener binds; the process never serves a partial catalog.

use anyhow::{Context, Result};
use tracing::info;

use catalog::Catalog;
use server::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,server=debug,pipeline=debug")
            }),
        )
        .init();

    let config = Config::from_env();
    info!("Catalog file: {}", config.data_path.display());

    info!("Loading catalog...");
    let catalog =
        Catalog::load_from_file(&config.data_path).context("Failed to load movie catalog")?;
    info!(
        "Catalog ready: {} movies, {} genres",
        catalog.len(),
        catalog.genres().len()
    );

    let state = AppState::new(catalog);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

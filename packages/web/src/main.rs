use anyhow::Context;
use store::MemoryStore;
use tracing_subscriber::EnvFilter;

use routes::AppState;
use settings::{Mode, Settings};

mod routes;
mod settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new().context("failed to load settings")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.mode != Mode::Production)
        .init();

    let store = MemoryStore::seeded().context("failed to seed the store")?;
    let app = routes::router(AppState { store });

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(mode = ?settings.mode, "Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

mod config;
mod error;
mod handlers;
mod meetup;
mod routes;
mod state;
mod templates;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, Cli};
use crate::routes::create_app;
use crate::state::AppState;

fn main() -> Result<()> {
    // Load .env before parsing so MEETUP_API_KEY and RUST_LOG can come from it
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| AppConfig::log_filter(cli.debug).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_cli(cli).context("Invalid configuration")?;

    let runtime = config
        .server
        .build_runtime()
        .context("Failed to start async runtime")?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> Result<()> {
    tracing::info!(
        server = ?config.server,
        debug = config.debug,
        timezone = ?config.timezone,
        "Starting meetup timeline server"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    let app = create_app(AppState::new(config)?);

    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

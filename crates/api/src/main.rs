use std::sync::Arc;

use anyhow::Context;

use coinshop_api::app::{AppServices, build_app};
use coinshop_api::config::Config;
use coinshop_api::jwt::JwtCodec;
use coinshop_api::telemetry;
use coinshop_ledger::storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env();

    let pool = storage::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;
    storage::migrate(&pool).await.context("migration failed")?;
    coinshop_catalog::seed(&pool)
        .await
        .context("failed to seed the goods catalog")?;

    let jwt = JwtCodec::new(config.jwt_secret.as_bytes(), config.token_lifetime_hours);
    let services = Arc::new(AppServices::new(pool, jwt));
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}

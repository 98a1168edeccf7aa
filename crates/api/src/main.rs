use std::sync::Arc;

use anyhow::Context;

use vitrine_api::app::{AppServices, build_app};
use vitrine_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vitrine_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let services =
        Arc::new(AppServices::new(&config).context("failed to build the sheets client")?);
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, sheet = %config.sheets.spreadsheet_id, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

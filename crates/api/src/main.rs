use std::sync::Arc;

use anyhow::Context;

use stockview_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    stockview_observability::init(config.log_format);

    // Data-load failure aborts startup; there is no degraded mode.
    let table = config
        .source
        .load()
        .inspect_err(|e| tracing::error!(source = %config.source, "inventory load failed: {e}"))
        .with_context(|| format!("failed to load inventory from {}", config.source))?;

    let app = stockview_api::app::build_app(Arc::new(table));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}

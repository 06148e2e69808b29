use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use nt::config::Settings;
use nt::logging::{init_tracing, shutdown_tracer};
use nt::metrics::{init_metrics, metrics_app};
use nt::router::init_router;
use nt::state::AppState;
use nt_auth::DbSessionProvider;
use nt_db::init_db_pool;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing("storage/logs").context("Failed to create log directory")?;

    let settings = Settings::from_env();

    let db = init_db_pool(&settings.database).await?;
    let provider = Arc::new(DbSessionProvider::new(db, settings.session.cookie_name.clone()));
    let state = AppState::new(settings.clone(), provider);
    let app = init_router(state);

    if let Some(handle) = init_metrics()? {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], settings.app.metrics_port));
        let listener = tokio::net::TcpListener::bind(metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!(%metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.app.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, base_url = %settings.app.base_url, "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    shutdown_tracer();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}

use dotenvy::dotenv;
use tracing::info;

use staffee::logging::init_tracing;
use staffee::metrics::{init_metrics, metrics_app};
use staffee::router::init_router;
use staffee::state::init_app_state;
use staffee_config::ServerConfig;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let metrics_handle = init_metrics();
    let state = init_app_state().await?;
    let server = ServerConfig::from_env();

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    info!(address = %server.bind_address(), "Server running");
    info!("Scalar UI available at {}/scalar", server.public_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// System Architect Backend Server

use tokio::net::TcpListener;
use tracing::info;

use system_architect_backend::{
    api::create_router, app_state::AppState, config::Config, monitoring::initialize_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_tracing()?;

    let config = Config::from_env()?;
    let addr = config.server_address();
    info!(
        origins = ?config.cors.allowed_origins,
        "Allowing cross-origin requests"
    );

    let app_state = AppState::new(config);
    let app = create_router(app_state)?;

    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 System Architect Backend listening on http://{}", addr);
    info!("  GET    /health    - Liveness probe");
    info!("  POST   /validate  - Validate graph structure");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

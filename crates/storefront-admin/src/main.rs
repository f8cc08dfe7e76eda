//! # Storefront Admin Backend
//!
//! Reads [`AppConfig`] from the environment, starts the store actors and serves the
//! HTTP API until Ctrl-C or SIGTERM. In-flight requests finish before the actors are
//! shut down.

use storefront_admin::config::AppConfig;
use storefront_admin::http::{build_router, AppState};
use storefront_admin::lifecycle::{setup_tracing, StorefrontSystem};
use tokio::net::TcpListener;
use tracing::{error, info};

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                error!(error = %e, "Could not register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env();
    info!(?config, "Starting storefront admin backend");

    let system = StorefrontSystem::start(&config).map_err(|e| e.to_string())?;
    let app = build_router(AppState::new(&system), config.max_body_bytes);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("Server running on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Application stopped");
    Ok(())
}

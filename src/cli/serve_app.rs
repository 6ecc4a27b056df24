//! Server runner

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};

use crate::domain::config::AppConfig;
use crate::server::{build_router, AppState};

use super::app::{build_pipeline, EXIT_ERROR, EXIT_SUCCESS};
use super::signals::shutdown_signal;

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(config: AppConfig) -> ExitCode {
    let port = config.port_or_default();
    let static_dir = config.static_dir_or_default().to_string();

    let state = AppState::new(build_pipeline(&config), &static_dir);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind to address");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    info!(port, static_dir = %static_dir, "Server listening on port {}", port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::from(EXIT_ERROR);
    }

    info!("Server shutdown complete");
    ExitCode::from(EXIT_SUCCESS)
}

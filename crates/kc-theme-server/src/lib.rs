//! # kc-theme-server
//!
//! HTTP service rendering the Keycloak Rust login theme.
//!
//! This crate provides:
//! - a render endpoint the identity server posts page contexts to
//! - preview routes rendering built-in mock contexts
//! - the bundled social provider icons
//! - health check endpoints
//!
//! ## Usage
//!
//! ```ignore
//! use kc_theme_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config)?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;

use axum::Router;
use kc_theme::Theme;
use tokio::net::TcpListener;

/// The login theme server.
pub struct Server {
    config: ServerConfig,
    theme: Theme,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// This loads and validates the theme configuration.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let theme = Theme::new(config.load_theme_config()?)?;

        tracing::info!(
            preview_enabled = config.preview_enabled,
            "Theme loaded"
        );

        Ok(Self { config, theme })
    }

    /// Runs the server.
    ///
    /// This starts the HTTP server and blocks until it receives a shutdown signal.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serves on an already bound listener until a shutdown signal.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let addr = listener.local_addr()?;
        let app = create_router(AppState::new(self.config, self.theme));

        tracing::info!("Server listening on http://{}", addr);

        // Run server with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates a test router without starting the server.
    ///
    /// This is useful for integration testing.
    pub fn test_router(&self) -> Router {
        create_router(AppState::new(self.config.clone(), self.theme.clone()))
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

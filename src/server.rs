//! HTTP server lifecycle

use crate::api::build_app;
use crate::artifacts::ArtifactStore;
use crate::config::PortalConfig;
use crate::error::{Error, Result};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A bound, not yet running, Portal Backstage server
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    /// Bind the listener and build the application
    pub async fn bind(config: &PortalConfig) -> Result<Self> {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", config.server.port);
            }
            Error::Internal(format!("Failed to bind to {}: {}", addr, e))
        })?;

        let app = build_app(Arc::new(ArtifactStore::new()), &config.cors);

        Ok(Self { listener, app })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `shutdown` resolves
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        tracing::info!("Portal Backstage listening on http://{}", addr);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Portal Backstage stopped");
        Ok(())
    }
}

/// Bind and serve until Ctrl+C
pub async fn run(config: &PortalConfig) -> Result<()> {
    let server = Server::bind(config).await?;
    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            }
            tracing::info!("Shutting down...");
        })
        .await
}

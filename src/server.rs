use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::RoomsStorage;
use crate::error::RoomsError;
use crate::router::{RoomsState, rooms_router};

/// Bound listener plus router; lives from startup until shutdown.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    pub async fn build(cfg: &Config) -> Result<Self, RoomsError> {
        let storage = RoomsStorage::connect(&cfg.database_url)?;
        let router = rooms_router(RoomsState::new(storage));
        let listener = TcpListener::bind(&cfg.listen_addr).await?;
        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RoomsError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until Ctrl-C, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> Result<(), RoomsError> {
        info!("HTTP server listening on {}", self.local_addr()?);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

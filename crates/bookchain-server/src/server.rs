use std::net::SocketAddr;
use std::sync::Arc;

use bookchain_ledger::{Ledger, LedgerReader};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Bookchain HTTP server.
pub struct BookchainServer {
    config: ServerConfig,
    ledger: Arc<Ledger>,
}

impl BookchainServer {
    pub fn new(config: ServerConfig, ledger: Arc<Ledger>) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.ledger)), &self.config)
    }

    /// Write every block of the chain to the log.
    pub fn log_chain(&self) -> ServerResult<()> {
        for block in self.ledger.snapshot()? {
            let payload = serde_json::to_string(block.payload())
                .map_err(|e| ServerError::Internal(e.to_string()))?;
            tracing::info!(
                position = block.position(),
                prev_digest = %block.prev_digest(),
                digest = %block.digest(),
                payload = %payload,
                "chain block"
            );
        }
        Ok(())
    }

    /// Claim the listening socket. Fails before any request is served when
    /// the address is unavailable.
    pub async fn bind(self) -> ServerResult<BoundServer> {
        if self.config.log_chain_on_start {
            self.log_chain()?;
        }
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("bookchain server listening on {local_addr}");
        Ok(BoundServer {
            listener,
            local_addr,
            app: self.router(),
        })
    }

    /// Bind, then serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.bind().await?.run().await
    }
}

/// A server whose socket is bound but which is not yet accepting requests.
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: axum::Router,
}

impl BoundServer {
    /// Address actually bound; resolves port 0 to the assigned port.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until Ctrl-C.
    pub async fn run(self) -> ServerResult<()> {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

use std::sync::Arc;

use tokio::net::TcpListener;

use tally_ledger::PlayerLedger;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Tally table server.
///
/// Owns the one `PlayerLedger` for the process and serves it over HTTP.
pub struct TallyServer {
    config: ServerConfig,
    ledger: Arc<PlayerLedger>,
}

impl TallyServer {
    pub fn new(config: ServerConfig) -> Self {
        let ledger = Arc::new(PlayerLedger::new(config.table));
        Self { config, ledger }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<PlayerLedger> {
        &self.ledger
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.ledger))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            seats = self.config.table.seats,
            starting_life = self.config.table.starting_life,
            "Tally server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = TallyServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:4180".parse().unwrap());
        assert_eq!(server.ledger().config().seats, 4);
    }

    #[test]
    fn router_builds() {
        let server = TallyServer::new(ServerConfig::default());
        let _router = server.router();
    }
}

//! HTTP server for Tally.
//!
//! Serves the player-state ledger over JSON/HTTP to polling UIs. One
//! `PlayerLedger` is constructed per process, owned by the server, and
//! shared with handlers through axum state; there is no push channel —
//! clients re-poll `/v1/state` after each mutation.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::TallyServer;

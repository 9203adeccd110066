//! HTTP server for Bookchain.
//!
//! Exposes the checkout ledger over HTTP: a write path that records
//! checkouts, a read path that returns the whole chain, and a helper that
//! assigns identifiers to catalogue books.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::HealthResponse;
pub use server::{BookchainServer, BoundServer};
pub use state::AppState;

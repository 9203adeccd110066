use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const CHAIN: &str = "/";
    pub const NEW_BOOK: &str = "/new";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
    pub const VERIFY: &str = "/v1/verify";
    pub const BLOCK: &str = "/v1/blocks/:position";
}

/// Build the axum router with all Bookchain endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(
            endpoints::CHAIN,
            get(handler::chain_handler).post(handler::checkout_handler),
        )
        .route(endpoints::NEW_BOOK, post(handler::new_book_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::VERIFY, get(handler::verify_handler))
        .route(endpoints::BLOCK, get(handler::block_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

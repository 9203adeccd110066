use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use bookchain_crypto::BookIdHasher;
use bookchain_ledger::{AuditReport, Block, LedgerReader, LedgerWriter};
use bookchain_types::{Book, Checkout};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// GET /: the whole chain, genesis first.
pub async fn chain_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<Block>>> {
    Ok(Json(state.ledger.snapshot()?))
}

/// GET /v1/blocks/:position: one block by position.
pub async fn block_handler(
    State(state): State<AppState>,
    position: Result<Path<u64>, PathRejection>,
) -> ServerResult<Json<Block>> {
    let Path(position) = position?;
    state
        .ledger
        .get(position)?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("no block at position {position}")))
}

/// POST /: record a checkout. Malformed bodies never reach the ledger.
pub async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<Checkout>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Block>)> {
    let Json(checkout) = payload?;
    let block = state.ledger.append(checkout)?;
    tracing::info!(
        position = block.position(),
        digest = %block.short_digest(),
        "checkout recorded"
    );
    Ok((StatusCode::CREATED, Json(block)))
}

/// POST /new: assign a book its derived identifier.
pub async fn new_book_handler(
    payload: Result<Json<Book>, JsonRejection>,
) -> ServerResult<Json<Book>> {
    let Json(mut book) = payload?;
    BookIdHasher::assign(&mut book);
    Ok(Json(book))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let head = state.ledger.head()?;
    Ok(Json(json!({
        "name": "bookchain-server",
        "version": env!("CARGO_PKG_VERSION"),
        "block_count": head.block_count,
        "tail_digest": head.tail.digest(),
    })))
}

/// Full-chain audit.
pub async fn verify_handler(State(state): State<AppState>) -> ServerResult<Json<AuditReport>> {
    Ok(Json(state.ledger.audit()?))
}

use bookchain_types::Checkout;
use serde::Serialize;

use crate::block::Block;
use crate::error::LedgerError;

/// Write boundary for ledger append operations.
pub trait LedgerWriter: Send + Sync {
    /// Build a block for `payload` on top of the current tail and admit it.
    fn append(&self, payload: Checkout) -> Result<Block, LedgerError>;

    /// Admit a block built elsewhere, validated against the current tail.
    fn submit(&self, candidate: Block) -> Result<(), LedgerError>;
}

/// Read boundary for ledger queries.
pub trait LedgerReader: Send + Sync {
    /// Point-in-time copy of the whole chain, genesis first.
    fn snapshot(&self) -> Result<Vec<Block>, LedgerError>;

    fn tail(&self) -> Result<Block, LedgerError>;

    fn get(&self, position: u64) -> Result<Option<Block>, LedgerError>;

    fn len(&self) -> Result<u64, LedgerError>;

    /// Block count and tail read together, so the count always equals the
    /// tail's position plus one.
    fn head(&self) -> Result<ChainHead, LedgerError>;
}

/// Consistent summary of the chain's current end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainHead {
    pub block_count: u64,
    pub tail: Block,
}

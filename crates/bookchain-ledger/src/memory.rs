use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bookchain_types::Checkout;
use tracing::{debug, warn};

use crate::block::{create_block, create_genesis, Block};
use crate::error::LedgerError;
use crate::traits::{ChainHead, LedgerReader, LedgerWriter};
use crate::validation::{AuditReport, ChainAuditor};
use crate::validator::Validator;

/// The append-only checkout ledger.
///
/// Holds the chain in process memory behind a `RwLock`. Appends hold the
/// write guard for the whole read-tail, build, validate, push sequence, so two
/// concurrent appends can never both extend the same tail. Readers take the
/// read guard and always see a whole chain.
pub struct Ledger {
    inner: RwLock<Chain>,
}

/// Genesis is kept apart from the rest so the tail always exists.
struct Chain {
    genesis: Block,
    blocks: Vec<Block>,
}

impl Chain {
    fn tail(&self) -> &Block {
        self.blocks.last().unwrap_or(&self.genesis)
    }

    fn len(&self) -> u64 {
        self.blocks.len() as u64 + 1
    }

    fn get(&self, position: u64) -> Option<&Block> {
        match position {
            0 => Some(&self.genesis),
            n => usize::try_from(n - 1)
                .ok()
                .and_then(|index| self.blocks.get(index)),
        }
    }

    fn to_vec(&self) -> Vec<Block> {
        std::iter::once(&self.genesis)
            .chain(self.blocks.iter())
            .cloned()
            .collect()
    }
}

impl Ledger {
    /// Create a ledger holding only a fresh genesis block.
    pub fn new() -> Result<Self, LedgerError> {
        let genesis = create_genesis()?;
        debug!(digest = %genesis.short_digest(), "genesis block sealed");
        Ok(Self {
            inner: RwLock::new(Chain {
                genesis,
                blocks: Vec::new(),
            }),
        })
    }

    /// Re-verify every link and digest in the chain.
    pub fn audit(&self) -> Result<AuditReport, LedgerError> {
        ChainAuditor::audit(self)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Chain>, LedgerError> {
        self.inner
            .read()
            .map_err(|_| LedgerError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Chain>, LedgerError> {
        self.inner
            .write()
            .map_err(|_| LedgerError::LockPoisoned("write"))
    }

    /// Validate `candidate` against the tail and push it. Caller holds the
    /// write guard.
    fn admit(chain: &mut Chain, candidate: Block) -> Result<Block, LedgerError> {
        if let Err(err) = Validator::check(&candidate, chain.tail()) {
            warn!(
                position = candidate.position(),
                error = %err,
                "candidate block rejected"
            );
            return Err(err);
        }

        debug!(
            position = candidate.position(),
            digest = %candidate.short_digest(),
            "block admitted"
        );
        chain.blocks.push(candidate.clone());
        Ok(candidate)
    }
}

impl LedgerWriter for Ledger {
    fn append(&self, payload: Checkout) -> Result<Block, LedgerError> {
        let mut chain = self.write()?;
        let candidate = create_block(chain.tail(), payload)?;
        Self::admit(&mut chain, candidate)
    }

    fn submit(&self, candidate: Block) -> Result<(), LedgerError> {
        let mut chain = self.write()?;
        Self::admit(&mut chain, candidate).map(|_| ())
    }
}

impl LedgerReader for Ledger {
    fn snapshot(&self) -> Result<Vec<Block>, LedgerError> {
        Ok(self.read()?.to_vec())
    }

    fn tail(&self) -> Result<Block, LedgerError> {
        Ok(self.read()?.tail().clone())
    }

    fn get(&self, position: u64) -> Result<Option<Block>, LedgerError> {
        Ok(self.read()?.get(position).cloned())
    }

    fn len(&self) -> Result<u64, LedgerError> {
        Ok(self.read()?.len())
    }

    fn head(&self) -> Result<ChainHead, LedgerError> {
        let chain = self.read()?;
        Ok(ChainHead {
            block_count: chain.len(),
            tail: chain.tail().clone(),
        })
    }
}

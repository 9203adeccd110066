use std::fmt;

use bookchain_crypto::HashLinker;
use bookchain_types::{Checkout, Timestamp};
use serde::Serialize;

use crate::error::LedgerError;

/// One sealed ledger entry.
///
/// Fields are private: the only way to build a `Block` in this crate's API is
/// [`Block::seal`], which computes the digest in the same step, so a block
/// whose digest has not been set is never observable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    position: u64,
    payload: Checkout,
    timestamp: Timestamp,
    prev_digest: String,
    digest: String,
}

impl Block {
    /// Build a block from explicit fields and compute its digest.
    pub fn seal(
        position: u64,
        timestamp: Timestamp,
        payload: Checkout,
        prev_digest: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        let prev_digest = prev_digest.into();
        let digest = HashLinker::digest(position, &timestamp, &payload, &prev_digest)?;
        Ok(Self {
            position,
            payload,
            timestamp,
            prev_digest,
            digest,
        })
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn payload(&self) -> &Checkout {
        &self.payload
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Digest of the predecessor; empty for genesis.
    pub fn prev_digest(&self) -> &str {
        &self.prev_digest
    }

    /// Digest stored when the block was sealed.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// First 8 characters of the digest, or all of it when shorter.
    pub fn short_digest(&self) -> &str {
        self.digest.get(..8).unwrap_or(&self.digest)
    }

    /// Returns `true` if this block has the shape of a genesis block.
    pub fn is_genesis(&self) -> bool {
        self.position == 0 && self.payload.is_genesis && self.prev_digest.is_empty()
    }

    /// Digest recomputed from the block's current fields.
    pub fn recompute_digest(&self) -> Result<String, LedgerError> {
        Ok(HashLinker::digest(
            self.position,
            &self.timestamp,
            &self.payload,
            &self.prev_digest,
        )?)
    }

    #[cfg(test)]
    pub(crate) fn payload_mut(&mut self) -> &mut Checkout {
        &mut self.payload
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: u64) {
        self.position = position;
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}]", self.position, self.short_digest())
    }
}

/// Build the block that follows `predecessor`, stamped with the current time.
pub fn create_block(predecessor: &Block, payload: Checkout) -> Result<Block, LedgerError> {
    let position = predecessor
        .position
        .checked_add(1)
        .ok_or(LedgerError::PositionOverflow(predecessor.position))?;
    Block::seal(
        position,
        Timestamp::now(),
        payload,
        predecessor.digest.clone(),
    )
}

/// Build the first block of a ledger.
///
/// Genesis has no real predecessor: it sits at position 0, links to the
/// empty digest, and carries [`Checkout::genesis`].
pub fn create_genesis() -> Result<Block, LedgerError> {
    Block::seal(0, Timestamp::now(), Checkout::genesis(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_shape() {
        let g = create_genesis().unwrap();
        assert_eq!(g.position(), 0);
        assert!(g.payload().is_genesis);
        assert_eq!(g.prev_digest(), "");
        assert!(g.is_genesis());
        assert_eq!(g.recompute_digest().unwrap(), g.digest());
    }

    #[test]
    fn create_block_links_to_predecessor() {
        let g = create_genesis().unwrap();
        let b = create_block(&g, Checkout::new("b1", "alice", "2024-01-01")).unwrap();
        assert_eq!(b.position(), 1);
        assert_eq!(b.prev_digest(), g.digest());
        assert!(!b.is_genesis());
        assert_eq!(b.recompute_digest().unwrap(), b.digest());
    }

    #[test]
    fn seal_uses_linker_digest() {
        let ts = Timestamp::from_raw("2024-01-01T00:00:00.000000000Z");
        let payload = Checkout::new("b1", "alice", "2024-01-01");
        let block = Block::seal(5, ts.clone(), payload.clone(), "prev").unwrap();
        let expected = HashLinker::digest(5, &ts, &payload, "prev").unwrap();
        assert_eq!(block.digest(), expected);
    }

    #[test]
    fn position_overflow_is_reported() {
        let ts = Timestamp::from_raw("t");
        let last = Block::seal(u64::MAX, ts, Checkout::new("b", "u", "d"), "p").unwrap();
        let err = create_block(&last, Checkout::new("b", "u", "d")).unwrap_err();
        assert_eq!(err, LedgerError::PositionOverflow(u64::MAX));
    }

    #[test]
    fn tampering_breaks_recomputed_digest() {
        let g = create_genesis().unwrap();
        let mut b = create_block(&g, Checkout::new("b1", "alice", "2024-01-01")).unwrap();
        b.payload_mut().user = "mallory".into();
        assert_ne!(b.recompute_digest().unwrap(), b.digest());
    }

    #[test]
    fn json_field_names() {
        let g = create_genesis().unwrap();
        let value = serde_json::to_value(&g).unwrap();
        assert_eq!(value["position"], 0);
        assert_eq!(value["prev_digest"], "");
        assert_eq!(value["digest"], g.digest());
        assert_eq!(value["payload"]["isgenesis"], true);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn display_format() {
        let g = create_genesis().unwrap();
        let shown = format!("{g}");
        assert!(shown.starts_with("#0 ["));
        assert!(shown.contains(g.short_digest()));
        assert_eq!(g.short_digest().len(), 8);
    }

    #[test]
    fn short_digest_tolerates_non_hex_digest() {
        let block = Block {
            position: 3,
            payload: Checkout::new("b", "u", "d"),
            timestamp: Timestamp::from_raw("t"),
            prev_digest: String::new(),
            digest: "a\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}".into(),
        };
        assert_eq!(block.short_digest(), block.digest());
        assert_eq!(format!("{block}"), format!("#3 [{}]", block.digest()));

        let short = Block {
            digest: "ab".into(),
            ..block
        };
        assert_eq!(short.short_digest(), "ab");
    }
}

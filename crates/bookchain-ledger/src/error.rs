use bookchain_crypto::HasherError;

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("block rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("position overflow: no position follows {0}")]
    PositionOverflow(u64),

    #[error("ledger {0} lock poisoned")]
    LockPoisoned(&'static str),
}

impl LedgerError {
    /// The failed validation check, if this is a rejection.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

impl From<HasherError> for LedgerError {
    fn from(err: HasherError) -> Self {
        match err {
            HasherError::Encoding(msg) => Self::Encoding(msg),
        }
    }
}

/// Which admission check a candidate block failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("previous digest mismatch: tail is {expected}, candidate links to {found}")]
    PrevDigestMismatch { expected: String, found: String },

    #[error("stored digest does not match recomputed digest at position {position}")]
    DigestMismatch { position: u64 },

    #[error("position gap: predecessor at {predecessor}, candidate at {found}")]
    PositionGap { predecessor: u64, found: u64 },
}

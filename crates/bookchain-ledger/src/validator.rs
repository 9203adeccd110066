use crate::block::Block;
use crate::error::{LedgerError, Rejection};

/// Admission check for a candidate block against its presumed predecessor.
pub struct Validator;

impl Validator {
    /// Run the admission checks, stopping at the first failure:
    ///
    /// 1. the candidate links to the predecessor's digest,
    /// 2. the candidate's stored digest equals the recomputed one,
    /// 3. the candidate sits exactly one position after the predecessor.
    ///
    /// A payload that cannot be encoded yields [`LedgerError::Encoding`]
    /// rather than a rejection.
    pub fn check(candidate: &Block, predecessor: &Block) -> Result<(), LedgerError> {
        if predecessor.digest() != candidate.prev_digest() {
            return Err(Rejection::PrevDigestMismatch {
                expected: predecessor.digest().to_string(),
                found: candidate.prev_digest().to_string(),
            }
            .into());
        }

        if candidate.recompute_digest()? != candidate.digest() {
            return Err(Rejection::DigestMismatch {
                position: candidate.position(),
            }
            .into());
        }

        if predecessor.position().checked_add(1) != Some(candidate.position()) {
            return Err(Rejection::PositionGap {
                predecessor: predecessor.position(),
                found: candidate.position(),
            }
            .into());
        }

        Ok(())
    }

    /// Returns `true` if the candidate may extend the chain after `predecessor`.
    pub fn is_valid(candidate: &Block, predecessor: &Block) -> bool {
        Self::check(candidate, predecessor).is_ok()
    }
}

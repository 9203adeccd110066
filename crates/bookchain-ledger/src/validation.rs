use serde::Serialize;

use crate::block::Block;
use crate::error::LedgerError;
use crate::traits::LedgerReader;

/// Result of a whole-chain audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub block_count: u64,
    pub genesis_valid: bool,
    pub links_valid: bool,
    pub digests_valid: bool,
    pub positions_sequential: bool,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during an audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub position: u64,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MalformedGenesis,
    BrokenLink,
    DigestMismatch,
    PositionGap,
}

/// Re-verifies an entire chain, collecting every violation rather than
/// stopping at the first.
pub struct ChainAuditor;

impl ChainAuditor {
    /// Audit the chain currently held by `reader`.
    pub fn audit<R: LedgerReader + ?Sized>(reader: &R) -> Result<AuditReport, LedgerError> {
        let blocks = reader.snapshot()?;
        Ok(Self::audit_blocks(&blocks))
    }

    /// Audit an explicit sequence of blocks, genesis first.
    pub fn audit_blocks(blocks: &[Block]) -> AuditReport {
        let mut violations = Vec::new();
        let mut genesis_valid = true;
        let mut links_valid = true;
        let mut digests_valid = true;
        let mut positions_sequential = true;

        match blocks.first() {
            Some(first) if first.is_genesis() => {}
            Some(first) => {
                genesis_valid = false;
                violations.push(Violation {
                    position: first.position(),
                    kind: ViolationKind::MalformedGenesis,
                    description: "first block is not a genesis block".into(),
                });
            }
            None => {
                genesis_valid = false;
                violations.push(Violation {
                    position: 0,
                    kind: ViolationKind::MalformedGenesis,
                    description: "chain is empty".into(),
                });
            }
        }

        for (index, block) in blocks.iter().enumerate() {
            let expected_position = index as u64;
            if block.position() != expected_position {
                positions_sequential = false;
                violations.push(Violation {
                    position: block.position(),
                    kind: ViolationKind::PositionGap,
                    description: format!(
                        "expected position {expected_position}, got {}",
                        block.position()
                    ),
                });
            }

            if index > 0 && block.prev_digest() != blocks[index - 1].digest() {
                links_valid = false;
                violations.push(Violation {
                    position: block.position(),
                    kind: ViolationKind::BrokenLink,
                    description: "previous digest link mismatch".into(),
                });
            }

            let recomputed = block.recompute_digest();
            if recomputed.as_deref().ok() != Some(block.digest()) {
                digests_valid = false;
                violations.push(Violation {
                    position: block.position(),
                    kind: ViolationKind::DigestMismatch,
                    description: match recomputed {
                        Ok(_) => "stored digest does not match computed".into(),
                        Err(e) => e.to_string(),
                    },
                });
            }
        }

        AuditReport {
            block_count: blocks.len() as u64,
            genesis_valid,
            links_valid,
            digests_valid,
            positions_sequential,
            violations,
        }
    }
}

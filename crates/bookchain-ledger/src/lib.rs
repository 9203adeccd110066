//! Append-only checkout ledger for Bookchain.
//!
//! This crate is the heart of Bookchain. It provides:
//! - [`Block`] sealing and the hash-linked construction of successors
//! - the [`Validator`] that admits or rejects a candidate block
//! - the [`Ledger`], an in-memory chain guarded for concurrent writers
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - whole-chain auditing via [`ChainAuditor`]

pub mod block;
pub mod error;
pub mod memory;
pub mod traits;
pub mod validation;
pub mod validator;

pub use block::{create_block, create_genesis, Block};
pub use error::{LedgerError, Rejection};
pub use memory::Ledger;
pub use traits::{ChainHead, LedgerReader, LedgerWriter};
pub use validation::{AuditReport, ChainAuditor, Violation, ViolationKind};
pub use validator::Validator;

//! Hashing primitives for Bookchain.
//!
//! Provides the SHA-256 [`HashLinker`] that seals and chains ledger blocks,
//! and the BLAKE3 [`BookIdHasher`] that names catalogue records.
//!
//! All hashing wraps established libraries; no custom cryptography.

pub mod book_id;
pub mod hasher;

pub use book_id::BookIdHasher;
pub use hasher::{HashLinker, HasherError};

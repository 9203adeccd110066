//! Foundation types for Bookchain.
//!
//! This crate provides the records carried by the checkout ledger. Every
//! other Bookchain crate depends on `bookchain-types`.
//!
//! # Key Types
//!
//! - [`Checkout`]: A book-lending event, the payload of every ledger block
//! - [`Book`]: A catalogue record whose identifier is derived from its ISBN
//! - [`Timestamp`]: Creation time of a block in canonical RFC 3339 form

pub mod book;
pub mod checkout;
pub mod temporal;

pub use book::Book;
pub use checkout::Checkout;
pub use temporal::Timestamp;

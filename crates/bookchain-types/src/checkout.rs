use std::fmt;

use serde::{Deserialize, Serialize};

/// A book-lending event: the payload recorded by every ledger block.
///
/// Field order is part of the digest format. The JSON names (`bookid`,
/// `user`, `checkoutdate`, `isgenesis`) are the wire names clients send and
/// the names hashed into each block; do not reorder or rename them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checkout {
    #[serde(rename = "bookid")]
    pub book_id: String,
    pub user: String,
    #[serde(rename = "checkoutdate")]
    pub checkout_date: String,
    /// Set only on the payload of the first block in a ledger.
    #[serde(rename = "isgenesis", default)]
    pub is_genesis: bool,
}

impl Checkout {
    /// A regular checkout record.
    pub fn new(
        book_id: impl Into<String>,
        user: impl Into<String>,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            user: user.into(),
            checkout_date: checkout_date.into(),
            is_genesis: false,
        }
    }

    /// The empty payload carried by a genesis block.
    pub fn genesis() -> Self {
        Self {
            is_genesis: true,
            ..Self::default()
        }
    }
}

impl fmt::Display for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_genesis {
            return write!(f, "genesis");
        }
        write!(
            f,
            "{} -> {} on {}",
            self.book_id, self.user, self.checkout_date
        )
    }
}

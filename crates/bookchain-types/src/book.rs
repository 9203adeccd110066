use serde::{Deserialize, Serialize};

/// A catalogue record for a book.
///
/// `id` is not chosen by clients; it is derived from `isbn` and
/// `publish_date` (see `bookchain_crypto::BookIdHasher`). Books are not
/// recorded on the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "publishdate")]
    pub publish_date: String,
    pub isbn: String,
}

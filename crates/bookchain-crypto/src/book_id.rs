use bookchain_types::Book;

/// Derives stable identifiers for catalogue books.
///
/// The identifier is a BLAKE3 digest of the ISBN followed by the publish
/// date. It names a record; it is not an integrity check, and books never
/// touch the ledger.
pub struct BookIdHasher;

impl BookIdHasher {
    const DOMAIN: &'static str = "bookchain-book-v1";

    /// Identifier for an ISBN and publish date pair.
    pub fn derive(isbn: &str, publish_date: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(Self::DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(isbn.as_bytes());
        hasher.update(publish_date.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// Overwrite a book's `id` with its derived identifier.
    pub fn assign(book: &mut Book) {
        book.id = Self::derive(&book.isbn, &book.publish_date);
    }
}

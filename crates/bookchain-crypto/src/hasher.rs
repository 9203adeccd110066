use bookchain_types::Timestamp;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Digest function that links ledger blocks together.
///
/// A block digest is SHA-256 over the concatenation of, in this order:
///
/// 1. the position as a decimal string,
/// 2. the timestamp string,
/// 3. the payload's JSON encoding,
/// 4. the predecessor's digest (empty for genesis).
///
/// Output is lowercase hex. The function is pure: identical fields always
/// produce the identical digest.
pub struct HashLinker;

impl HashLinker {
    /// Compute the digest of a block from its fields.
    pub fn digest<P: Serialize + ?Sized>(
        position: u64,
        timestamp: &Timestamp,
        payload: &P,
        prev_digest: &str,
    ) -> Result<String, HasherError> {
        let position = position.to_string();
        let payload = Self::encode_payload(payload)?;
        Ok(Self::digest_parts(&[
            position.as_bytes(),
            timestamp.as_str().as_bytes(),
            &payload,
            prev_digest.as_bytes(),
        ]))
    }

    /// Canonical payload bytes as hashed into a block.
    ///
    /// Struct fields serialize in declaration order, so a given payload type
    /// always encodes the same way.
    pub fn encode_payload<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>, HasherError> {
        serde_json::to_vec(payload).map_err(|e| HasherError::Encoding(e.to_string()))
    }

    /// SHA-256 over the concatenated parts, lowercase hex.
    pub fn digest_parts(parts: &[&[u8]]) -> String {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        hex::encode(hasher.finalize())
    }
}

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("payload encoding error: {0}")]
    Encoding(String),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bookchain_types::Checkout;
    use proptest::prelude::*;

    use super::*;

    fn ts() -> Timestamp {
        Timestamp::from_raw("2024-01-01T00:00:00.000000000Z")
    }

    #[test]
    fn digest_is_deterministic() {
        let payload = Checkout::new("b1", "alice", "2024-01-01");
        let d1 = HashLinker::digest(1, &ts(), &payload, "abc").unwrap();
        let d2 = HashLinker::digest(1, &ts(), &payload, "abc").unwrap();
        assert_eq!(d1, d2);
        assert_eq!(d1.len(), 64);
        assert!(d1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn digest_matches_manual_concatenation() {
        let payload = Checkout::new("b1", "alice", "2024-01-01");
        let json = serde_json::to_string(&payload).unwrap();
        let manual = format!("1{}{}prev", ts().as_str(), json);

        let expected = hex::encode(Sha256::digest(manual.as_bytes()));
        let actual = HashLinker::digest(1, &ts(), &payload, "prev").unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn empty_input_is_sha256_of_nothing() {
        assert_eq!(
            HashLinker::digest_parts(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn positions_past_255_do_not_collide() {
        let payload = Checkout::new("b", "u", "d");
        let low = HashLinker::digest(1, &ts(), &payload, "").unwrap();
        let high = HashLinker::digest(257, &ts(), &payload, "").unwrap();
        let far = HashLinker::digest(65_537, &ts(), &payload, "").unwrap();
        assert_ne!(low, high);
        assert_ne!(low, far);
        assert_ne!(high, far);
    }

    #[test]
    fn every_field_affects_digest() {
        let payload = Checkout::new("b1", "alice", "2024-01-01");
        let base = HashLinker::digest(3, &ts(), &payload, "p").unwrap();

        let other_ts = Timestamp::from_raw("2024-01-01T00:00:00.000000001Z");
        let other_payload = Checkout::new("b1", "mallory", "2024-01-01");
        assert_ne!(base, HashLinker::digest(4, &ts(), &payload, "p").unwrap());
        assert_ne!(base, HashLinker::digest(3, &other_ts, &payload, "p").unwrap());
        assert_ne!(base, HashLinker::digest(3, &ts(), &other_payload, "p").unwrap());
        assert_ne!(base, HashLinker::digest(3, &ts(), &payload, "q").unwrap());
    }

    #[test]
    fn unencodable_payload_is_an_error() {
        let mut bad = BTreeMap::new();
        bad.insert((1u8, 2u8), 3u8);
        let err = HashLinker::digest(1, &ts(), &bad, "").unwrap_err();
        assert!(matches!(err, HasherError::Encoding(_)));
    }

    proptest! {
        #[test]
        fn digest_determinism_holds_for_arbitrary_fields(
            position in any::<u64>(),
            raw_ts in "[0-9TZ:.-]{0,40}",
            book in ".{0,16}",
            user in ".{0,16}",
            date in ".{0,16}",
            prev in "[0-9a-f]{0,64}",
        ) {
            let timestamp = Timestamp::from_raw(raw_ts);
            let payload = Checkout::new(book, user, date);
            let a = HashLinker::digest(position, &timestamp, &payload, &prev).unwrap();
            let b = HashLinker::digest(position, &timestamp, &payload, &prev).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}

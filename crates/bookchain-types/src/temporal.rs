use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Creation time of a ledger block.
///
/// Stored as the RFC 3339 string that goes into the block digest, so the
/// value hashed and the value serialized can never drift apart. Captured once
/// when a block is sealed and never changed afterwards.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Timestamp for the current wall-clock time, UTC, nanosecond precision.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Canonical form of an explicit instant.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.to_rfc3339_opts(SecondsFormat::Nanos, true))
    }

    /// Wrap an already-formatted string without checking it.
    ///
    /// Blocks received from outside the process carry whatever string they
    /// were sealed with; the digest covers it verbatim.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The exact string fed to the block digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

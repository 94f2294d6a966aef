//! Student identifiers.
//!
//! A `StudentId` is 12 bytes laid out as:
//!
//! | bytes | content                              |
//! |-------|--------------------------------------|
//! | 0..4  | seconds since the Unix epoch (BE)    |
//! | 4..9  | random value, fixed per process      |
//! | 9..12 | counter (BE), random starting point  |
//!
//! It is rendered as 24 lowercase hex characters. Ids generated by one
//! process sort roughly by creation time.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of the hex rendering of a `StudentId`.
pub const STUDENT_ID_HEX_LEN: usize = 24;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random::<[u8; 5]>);

static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));

/// Unique identifier for a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId([u8; 12]);

impl StudentId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        let seconds = u32::try_from(chrono::Utc::now().timestamp()).unwrap_or(u32::MAX);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);
        Self(bytes)
    }

    /// Creates an identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Seconds since the Unix epoch at which the id was generated.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns true if `s` is exactly 24 hexadecimal characters (either case).
    pub fn is_valid(s: &str) -> bool {
        s.len() == STUDENT_ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Error returned when a string is not a valid `StudentId`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid student id {0:?}: expected {STUDENT_ID_HEX_LEN} hex characters")]
pub struct ParseStudentIdError(pub String);

impl FromStr for StudentId {
    type Err = ParseStudentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(ParseStudentIdError(s.to_string()));
        }

        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| ParseStudentIdError(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for StudentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

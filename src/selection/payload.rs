//! Selection payloads — foreign-tagged immutable byte sequences.

use serde::{Deserialize, Serialize};

/// Where a payload's bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Provenance {
    /// The bytes crossed the window-system boundary and must be
    /// decoded downstream before use as text. The tag carries no other
    /// meaning.
    Foreign,
}

/// An immutable byte sequence fetched from a selection class.
///
/// Length is authoritative: the bytes are never scanned for a
/// terminator, transcoded, or truncated, and may contain embedded NUL
/// bytes. The provenance tag propagates with the value through clones
/// and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPayload {
    #[serde(with = "serde_bytes")]
    bytes: Vec<u8>,
    provenance: Provenance,
}

impl SelectionPayload {
    /// Wrap bytes received across the boundary, tagging them foreign.
    pub fn foreign(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            provenance: Provenance::Foreign,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Hand the bytes to a decoder, consuming the payload. Decoding is
    /// how the foreign tag is discharged.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

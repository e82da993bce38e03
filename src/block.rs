use std::fmt;

use serde::{Serialize, Deserialize};
use serde_json::Value;
use sha2::{Sha256, Digest};

/// Placeholder previous-hash for a block that has not been linked into a
/// ledger yet. `Ledger::append` overwrites it with the real predecessor hash.
pub const UNLINKED_PREVIOUS_HASH: &str = " ";

/// Previous-hash carried by the genesis block, which has no real predecessor.
/// Distinct from [`UNLINKED_PREVIOUS_HASH`]: this one marks the chain root.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// A single hash-sealed record. Linkage to the predecessor is by hash value
/// only, so a block can be serialized and shipped on its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub index: u64,
    /// Caller-supplied, opaque to the ledger. Hashed verbatim, never parsed.
    pub timestamp: String,
    pub data: Value,
    pub previous_hash: String,
    pub hash: String,
}

impl Block {
    pub fn new(index: u64, timestamp: String, data: Value, previous_hash: String) -> Self {
        let mut block = Block {
            index,
            timestamp,
            data,
            previous_hash,
            hash: String::new(),
        };
        block.hash = block.calculate_hash();
        block
    }

    /// A block with no predecessor assigned yet, ready to hand to
    /// `Ledger::append`.
    pub fn standalone(index: u64, timestamp: String, data: Value) -> Self {
        Self::new(index, timestamp, data, UNLINKED_PREVIOUS_HASH.to_string())
    }

    /// Recomputes the digest from the current field values. Pure: two calls
    /// on an unmodified block return the same string, and `self.hash` is
    /// never touched here.
    pub fn calculate_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.index.to_string());
        hasher.update(&self.previous_hash);
        hasher.update(&self.timestamp);
        hasher.update(self.canonical_payload());
        format!("{:x}", hasher.finalize())
    }

    /// Canonical byte form of the payload used for hashing. `serde_json`
    /// objects are BTreeMap-backed, so keys serialize in sorted order and the
    /// output is stable across processes.
    fn canonical_payload(&self) -> String {
        serde_json::to_string(&self.data).expect("json value serialization cannot fail")
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block #{}", self.index)?;
        writeln!(f, "Data: {}", self.data)?;
        writeln!(f, "Hash: {}", self.hash)?;
        write!(f, "Previous: {}", self.previous_hash)
    }
}

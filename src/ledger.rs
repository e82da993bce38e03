use std::fmt;

use log::{info, warn};
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::block::{Block, GENESIS_PREVIOUS_HASH};
use crate::error::IntegrityError;

/// Genesis fields are fixed so every ledger starts from the same digest.
const GENESIS_TIMESTAMP: &str = "1970-01-01T00:00:00Z";
const GENESIS_DATA: &str = "Genesis Block";

/// Append-only chain of [`Block`]s. Always holds at least the genesis block.
///
/// The `chain` field is public in keeping with the block fields: mutating a
/// stored block out-of-band is exactly the tampering that [`Ledger::verify`]
/// exists to detect, and tests and demos reach through this field to do it.
/// The append path itself never rewrites a stored block.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ledger {
    pub chain: Vec<Block>,
}

impl Ledger {
    pub fn new() -> Self {
        let mut ledger = Ledger { chain: vec![] };
        ledger.create_genesis_block();
        ledger
    }

    fn create_genesis_block(&mut self) {
        let genesis_block = Block::new(
            0,
            GENESIS_TIMESTAMP.to_string(),
            Value::String(GENESIS_DATA.to_string()),
            GENESIS_PREVIOUS_HASH.to_string(),
        );
        self.chain.push(genesis_block);
    }

    pub fn last_block(&self) -> &Block {
        self.chain.last().expect("ledger always contains the genesis block")
    }

    /// Links the block to the current tail and reseals it before storing.
    /// Whatever `previous_hash` and `hash` the caller put on the block are
    /// overwritten. Never fails; `index` values are not policed.
    pub fn append(&mut self, mut block: Block) {
        block.previous_hash = self.last_block().hash.clone();
        block.hash = block.calculate_hash();
        info!("block appended: index={} hash={}", block.index, block.hash);
        self.chain.push(block);
    }

    /// Walks the chain in order and re-derives every digest from the fields
    /// as currently stored, trusting nothing but the genesis block. Stops at
    /// the first violation.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        for i in 1..self.chain.len() {
            let current_block = &self.chain[i];
            let previous_block = &self.chain[i - 1];

            if current_block.hash != current_block.calculate_hash() {
                warn!("integrity violation: stale hash at position {}", i);
                return Err(IntegrityError::HashMismatch { position: i });
            }
            if current_block.previous_hash != previous_block.hash {
                warn!("integrity violation: broken link at position {}", i);
                return Err(IntegrityError::BrokenLink { position: i });
            }
        }
        Ok(())
    }

    pub fn is_chain_valid(&self) -> bool {
        self.verify().is_ok()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the chain the way the demo consumes it: every block after genesis,
/// in chain order.
impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.chain.iter().skip(1) {
            writeln!(f, "{}", block)?;
        }
        Ok(())
    }
}

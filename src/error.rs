use thiserror::Error;

/// The one failure the crate reports: a verification walk found a block
/// whose stored state no longer matches what re-derivation produces.
/// Positions are offsets into the chain, not the blocks' own `index` fields
/// (those are caller-chosen and not policed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("block at position {position}: stored hash does not match its recomputed hash")]
    HashMismatch { position: usize },
    #[error("block at position {position}: previous-hash does not match the predecessor's hash")]
    BrokenLink { position: usize },
}

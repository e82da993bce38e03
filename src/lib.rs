//! Minimal tamper-evident append-only ledger.
//!
//! Blocks are linked by value: each one stores the hex digest of its
//! predecessor alongside a digest of its own fields. Verification re-derives
//! every digest from the fields as currently stored, so any out-of-band edit
//! to a stored block shows up without any external trusted state.
//!
//! The ledger is a plain single-writer, in-memory structure with no internal
//! locking; callers sharing one across threads wrap it in a mutex.

pub mod block;
pub mod error;
pub mod ledger;

pub use block::{Block, GENESIS_PREVIOUS_HASH, UNLINKED_PREVIOUS_HASH};
pub use error::IntegrityError;
pub use ledger::Ledger;

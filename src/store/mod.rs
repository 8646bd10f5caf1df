//! Entity store subsystem
//!
//! The transactional backend seam the engine executes against, plus an
//! in-memory implementation with snapshot/rollback transactions.

mod errors;
mod memory;
mod store;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::{identity_key, EntityStore};

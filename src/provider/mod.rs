//! Entity provider subsystem: paged query engine and batch mutator
//!
//! Compiles filter trees and sort specifications, executes count, paged
//! load, and delete-all over filtered result windows, and applies batched
//! add/modify/remove mutations with optional engine-owned transactions.
//!
//! # Invariants
//!
//! - Repeated loads with the same filter, sort, and window over an
//!   unmutated store return the same rows in the same order
//! - A window never under- or over-fetches: at most `count` rows starting
//!   at `start_index`
//! - Owned-transaction mutation batches are all-or-nothing; the original
//!   failure is always the one surfaced

mod engine;
mod errors;
mod provider;
mod sorter;
mod window;

pub use engine::StoreEntityProvider;
pub use errors::{MutationError, ProviderError, ProviderResult};
pub use provider::EntityProvider;
pub use sorter::CompiledSort;
pub use window::QueryWindow;

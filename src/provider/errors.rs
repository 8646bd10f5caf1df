//! # Entity Provider Errors
//!
//! Error types for the paged query engine and the batch mutator.

use thiserror::Error;

use crate::compiler::CompileError;
use crate::store::StoreError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// A store failure that aborted a batch mutation
///
/// Wraps the underlying store error as the source so the original cause is
/// re-surfaced rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("batch {operation} failed: {source}")]
pub struct MutationError {
    /// The batch step that failed (`begin`, `insert`, `modify`, `remove`, `commit`)
    pub operation: &'static str,
    /// The underlying store failure
    #[source]
    pub source: StoreError,
}

impl MutationError {
    pub fn new(operation: &'static str, source: StoreError) -> Self {
        Self { operation, source }
    }
}

/// Entity provider errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Filter or sort translation failed; nothing was executed
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A batch save or delete aborted mid-sequence
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// A read-side store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

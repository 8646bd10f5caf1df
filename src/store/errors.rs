//! # Store Errors
//!
//! Error types for the entity store seam.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Entity store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the given identity exists
    #[error("no '{entity_type}' record with identity '{identity}'")]
    MissingEntity {
        /// Entity type name
        entity_type: String,
        /// Identity that failed to resolve
        identity: String,
    },

    /// An insert collided with an existing identity
    #[error("'{entity_type}' record with identity '{identity}' already exists")]
    DuplicateIdentity {
        /// Entity type name
        entity_type: String,
        /// Colliding identity
        identity: String,
    },

    /// A record that must carry an identity did not
    #[error("'{entity_type}' record has no identity")]
    MissingIdentity {
        /// Entity type name
        entity_type: String,
    },

    /// Commit or rollback was issued without a transaction
    #[error("no active transaction")]
    NoActiveTransaction,

    /// A transaction was begun while one was already active
    #[error("a transaction is already active")]
    NestedTransaction,

    /// Backend-specific failure
    #[error("store backend failure: {0}")]
    Backend(String),
}

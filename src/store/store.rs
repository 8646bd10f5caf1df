//! Entity store seam
//!
//! The transactional backend the paged query engine and batch mutator run
//! against. Implementations own durability and isolation; the engine only
//! requires that `scan` order is stable for an unmutated store and that
//! `rollback` undoes everything since `begin_transaction`.

use serde_json::Value;

use crate::schema::EntityType;

use super::errors::StoreResult;

/// A transactional record store
pub trait EntityStore {
    /// Begins a transaction; nesting is not supported
    fn begin_transaction(&mut self) -> StoreResult<()>;

    /// Commits the active transaction
    fn commit(&mut self) -> StoreResult<()>;

    /// Rolls back the active transaction, undoing all changes since begin
    fn rollback(&mut self) -> StoreResult<()>;

    /// Returns true while a transaction is active
    fn in_transaction(&self) -> bool;

    /// Returns snapshots of every record of the type, in identity order
    ///
    /// The identity order requirement is what makes an empty sort
    /// specification deterministic across repeated page loads.
    fn scan(&self, entity_type: &EntityType) -> StoreResult<Vec<Value>>;

    /// Inserts a record, assigning an identity if it has none
    ///
    /// Returns the stored record including its identity.
    fn insert(&mut self, entity_type: &EntityType, record: Value) -> StoreResult<Value>;

    /// Replaces an existing record wholesale
    fn replace(&mut self, entity_type: &EntityType, record: &Value) -> StoreResult<()>;

    /// Merges a detached copy onto the live record
    ///
    /// Object fields overlay recursively; live fields the copy does not
    /// carry are preserved. This is the reconciliation step for detached
    /// entities: a copy must not silently erase fields the store knows
    /// about but the copy never saw.
    fn merge(&mut self, entity_type: &EntityType, record: &Value) -> StoreResult<()>;

    /// Removes the record with the given identity
    fn remove(&mut self, entity_type: &EntityType, identity: &Value) -> StoreResult<()>;
}

/// Canonical key form of an identity value
///
/// Strings key as themselves, other scalars by their JSON rendering, so
/// identity order is stable and human-readable.
pub fn identity_key(identity: &Value) -> String {
    match identity {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

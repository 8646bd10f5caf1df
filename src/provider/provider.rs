//! Entity provider capability
//!
//! The boundary contract between the caller-facing query surface and the
//! engine that compiles filters and executes against a store.

use serde_json::Value;

use crate::filter::{Filter, SortSpec};
use crate::schema::EntityType;

use super::errors::ProviderResult;
use super::window::QueryWindow;

/// Compiles filters and sorts, and executes count/load/save/delete
/// against a backing store
pub trait EntityProvider {
    /// Returns the number of records matching the filters
    fn query_size(&mut self, entity_type: &EntityType, filters: &[Filter])
        -> ProviderResult<usize>;

    /// Loads one page of the filtered, sorted result set
    ///
    /// Returned records are value snapshots: mutating them never writes
    /// through to the store. The `detached` flag travels with the query
    /// definition because it decides how `save_items` reconciles the
    /// copies later.
    fn load_items(
        &mut self,
        entity_type: &EntityType,
        window: QueryWindow,
        detached: bool,
        filters: &[Filter],
        sort: &SortSpec,
    ) -> ProviderResult<Vec<Value>>;

    /// Applies one batch of add/modify/remove mutations
    ///
    /// With `owns_transaction` the engine brackets the batch in its own
    /// transaction and rolls back on any failure; otherwise the caller
    /// owns the boundaries and only the failure propagates. Delete wins
    /// over add/modify for the same identity within the batch, and a
    /// record that was never persisted is never issued a delete.
    fn save_items(
        &mut self,
        entity_type: &EntityType,
        added: &[Value],
        modified: &[Value],
        removed: &[Value],
        owns_transaction: bool,
        detached: bool,
    ) -> ProviderResult<()>;

    /// Removes every record matching the filters
    ///
    /// All-or-nothing when the engine owns the transaction; best-effort
    /// with the first failure surfaced when it does not. The sort is
    /// accepted for interface symmetry only.
    fn delete_all_items(
        &mut self,
        owns_transaction: bool,
        entity_type: &EntityType,
        filters: &[Filter],
        sort: &SortSpec,
    ) -> ProviderResult<bool>;

    /// Returns true if the record was never assigned a store identity
    fn is_new_entity(&self, entity_type: &EntityType, record: &Value) -> bool;
}

//! Store-backed entity provider
//!
//! Executes the compiled predicate and sort against an [`EntityStore`].
//!
//! Query flow (strict order):
//! 1. Compile filters into a predicate, sort keys into resolved paths
//! 2. Scan the store (identity order)
//! 3. Filter records with the predicate
//! 4. Apply the stable sort
//! 5. Apply the window as offset+limit
//!
//! The scan order plus the stable sort make repeated loads with the same
//! inputs return the same rows in the same order, so adjacent windows
//! tile the result set with no duplicates and no gaps.

use serde_json::Value;

use crate::compiler::compile_filters;
use crate::filter::{Filter, SortSpec};
use crate::schema::EntityType;
use crate::store::{EntityStore, StoreResult};

use super::errors::{MutationError, ProviderResult};
use super::provider::EntityProvider;
use super::sorter::CompiledSort;
use super::window::QueryWindow;

/// An [`EntityProvider`] executing against an [`EntityStore`]
#[derive(Debug)]
pub struct StoreEntityProvider<S: EntityStore> {
    store: S,
}

impl<S: EntityStore> StoreEntityProvider<S> {
    /// Creates a provider over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the backing store mutably
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the provider, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads the full filtered, sorted result set
    fn matching_records(
        &mut self,
        entity_type: &EntityType,
        filters: &[Filter],
        sort: &SortSpec,
    ) -> ProviderResult<Vec<Value>> {
        let predicate = compile_filters(entity_type, filters)?;
        let sort = CompiledSort::compile(entity_type, sort)?;

        let mut records: Vec<Value> = self
            .store
            .scan(entity_type)?
            .into_iter()
            .filter(|record| predicate.matches(record))
            .collect();
        sort.sort(&mut records);
        Ok(records)
    }

    /// Runs a mutation batch inside an owned transaction when requested
    ///
    /// On failure the owned transaction is rolled back and the original
    /// failure is surfaced; a rollback failure never masks it.
    fn transactional<F>(&mut self, owns_transaction: bool, body: F) -> Result<(), MutationError>
    where
        F: FnOnce(&mut S) -> Result<(), MutationError>,
    {
        if owns_transaction {
            step("begin", self.store.begin_transaction())?;
        }

        let result = body(&mut self.store)
            .and_then(|()| {
                if owns_transaction {
                    step("commit", self.store.commit())
                } else {
                    Ok(())
                }
            });

        if let Err(err) = result {
            if owns_transaction && self.store.in_transaction() {
                let _ = self.store.rollback();
            }
            return Err(err);
        }
        Ok(())
    }
}

fn step<T>(operation: &'static str, result: StoreResult<T>) -> Result<T, MutationError> {
    result.map_err(|source| MutationError::new(operation, source))
}

/// Identity-aware batch membership
///
/// Records with a store identity compare by identity; records that were
/// never persisted compare structurally (an item created and deleted in
/// the same edit session has no identity yet).
fn batch_contains(entity_type: &EntityType, batch: &[Value], record: &Value) -> bool {
    match entity_type.identity_of(record) {
        Some(identity) => batch
            .iter()
            .any(|candidate| entity_type.identity_of(candidate) == Some(identity)),
        None => batch.contains(record),
    }
}

impl<S: EntityStore> EntityProvider for StoreEntityProvider<S> {
    fn query_size(
        &mut self,
        entity_type: &EntityType,
        filters: &[Filter],
    ) -> ProviderResult<usize> {
        let predicate = compile_filters(entity_type, filters)?;
        let count = self
            .store
            .scan(entity_type)?
            .iter()
            .filter(|record| predicate.matches(record))
            .count();
        Ok(count)
    }

    fn load_items(
        &mut self,
        entity_type: &EntityType,
        window: QueryWindow,
        _detached: bool,
        filters: &[Filter],
        sort: &SortSpec,
    ) -> ProviderResult<Vec<Value>> {
        // Zero-row probe: no scan pass at all
        if window.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.matching_records(entity_type, filters, sort)?;
        Ok(records
            .into_iter()
            .skip(window.start_index)
            .take(window.count)
            .collect())
    }

    fn save_items(
        &mut self,
        entity_type: &EntityType,
        added: &[Value],
        modified: &[Value],
        removed: &[Value],
        owns_transaction: bool,
        detached: bool,
    ) -> ProviderResult<()> {
        self.transactional(owns_transaction, |store| {
            for record in added {
                if !batch_contains(entity_type, removed, record) {
                    step("insert", store.insert(entity_type, record.clone()))?;
                }
            }

            for record in modified {
                if !batch_contains(entity_type, removed, record) {
                    if detached {
                        // Merge-before-write: the detached copy must not
                        // erase live fields it never carried
                        step("modify", store.merge(entity_type, record))?;
                    } else {
                        step("modify", store.replace(entity_type, record))?;
                    }
                }
            }

            for record in removed {
                if batch_contains(entity_type, added, record) {
                    continue;
                }
                // A record never persisted has nothing to delete
                let identity = match entity_type.identity_of(record) {
                    Some(identity) => identity.clone(),
                    None => continue,
                };
                step("remove", store.remove(entity_type, &identity))?;
            }

            Ok(())
        })?;
        Ok(())
    }

    fn delete_all_items(
        &mut self,
        owns_transaction: bool,
        entity_type: &EntityType,
        filters: &[Filter],
        sort: &SortSpec,
    ) -> ProviderResult<bool> {
        let records = self.matching_records(entity_type, filters, sort)?;

        self.transactional(owns_transaction, |store| {
            for record in &records {
                let identity = match entity_type.identity_of(record) {
                    Some(identity) => identity.clone(),
                    None => continue,
                };
                step("remove", store.remove(entity_type, &identity))?;
            }
            Ok(())
        })?;
        Ok(true)
    }

    fn is_new_entity(&self, entity_type: &EntityType, record: &Value) -> bool {
        entity_type.is_new_entity(record)
    }
}

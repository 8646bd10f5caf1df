//! In-memory transactional entity store
//!
//! Records live in per-type ordered maps keyed by identity, so scans are
//! deterministic. A transaction snapshots the whole state; rollback
//! restores the snapshot. Inserted records without an identity are
//! assigned a fresh UUID.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::schema::EntityType;

use super::errors::{StoreError, StoreResult};
use super::store::{identity_key, EntityStore};

type Table = BTreeMap<String, Value>;

/// In-memory implementation of [`EntityStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: HashMap<String, Table>,
    snapshot: Option<HashMap<String, Table>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with the given identity, if present
    pub fn get(&self, entity_type: &EntityType, identity: &Value) -> Option<Value> {
        self.tables
            .get(&entity_type.name)
            .and_then(|table| table.get(&identity_key(identity)))
            .cloned()
    }

    /// Returns the number of records of the type
    pub fn len(&self, entity_type: &EntityType) -> usize {
        self.tables
            .get(&entity_type.name)
            .map(|table| table.len())
            .unwrap_or(0)
    }

    /// Returns true if no records of the type exist
    pub fn is_empty(&self, entity_type: &EntityType) -> bool {
        self.len(entity_type) == 0
    }

    fn table_mut(&mut self, entity_type: &EntityType) -> &mut Table {
        self.tables.entry(entity_type.name.clone()).or_default()
    }

    fn required_key(&self, entity_type: &EntityType, record: &Value) -> StoreResult<String> {
        let identity = entity_type
            .identity_of(record)
            .ok_or_else(|| StoreError::MissingIdentity {
                entity_type: entity_type.name.clone(),
            })?;
        Ok(identity_key(identity))
    }
}

impl EntityStore for MemoryStore {
    fn begin_transaction(&mut self) -> StoreResult<()> {
        if self.snapshot.is_some() {
            return Err(StoreError::NestedTransaction);
        }
        self.snapshot = Some(self.tables.clone());
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or(StoreError::NoActiveTransaction)
    }

    fn rollback(&mut self) -> StoreResult<()> {
        match self.snapshot.take() {
            Some(snapshot) => {
                self.tables = snapshot;
                Ok(())
            }
            None => Err(StoreError::NoActiveTransaction),
        }
    }

    fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    fn scan(&self, entity_type: &EntityType) -> StoreResult<Vec<Value>> {
        Ok(self
            .tables
            .get(&entity_type.name)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default())
    }

    fn insert(&mut self, entity_type: &EntityType, mut record: Value) -> StoreResult<Value> {
        if entity_type.is_new_entity(&record) {
            let identity = Value::String(Uuid::new_v4().to_string());
            match &mut record {
                Value::Object(fields) => {
                    fields.insert(entity_type.identity_field.clone(), identity);
                }
                _ => {
                    return Err(StoreError::Backend(format!(
                        "'{}' record is not an object",
                        entity_type.name
                    )))
                }
            }
        }

        let key = self.required_key(entity_type, &record)?;
        let table = self.table_mut(entity_type);
        if table.contains_key(&key) {
            return Err(StoreError::DuplicateIdentity {
                entity_type: entity_type.name.clone(),
                identity: key,
            });
        }
        table.insert(key, record.clone());
        Ok(record)
    }

    fn replace(&mut self, entity_type: &EntityType, record: &Value) -> StoreResult<()> {
        let key = self.required_key(entity_type, record)?;
        let name = entity_type.name.clone();
        let table = self.table_mut(entity_type);
        match table.get_mut(&key) {
            Some(live) => {
                *live = record.clone();
                Ok(())
            }
            None => Err(StoreError::MissingEntity {
                entity_type: name,
                identity: key,
            }),
        }
    }

    fn merge(&mut self, entity_type: &EntityType, record: &Value) -> StoreResult<()> {
        let key = self.required_key(entity_type, record)?;
        let name = entity_type.name.clone();
        let table = self.table_mut(entity_type);
        match table.get_mut(&key) {
            Some(live) => {
                merge_value(live, record);
                Ok(())
            }
            None => Err(StoreError::MissingEntity {
                entity_type: name,
                identity: key,
            }),
        }
    }

    fn remove(&mut self, entity_type: &EntityType, identity: &Value) -> StoreResult<()> {
        let key = identity_key(identity);
        let name = entity_type.name.clone();
        let table = self.table_mut(entity_type);
        match table.remove(&key) {
            Some(_) => Ok(()),
            None => Err(StoreError::MissingEntity {
                entity_type: name,
                identity: key,
            }),
        }
    }
}

/// Overlays a patch onto a live value
///
/// Objects merge field-wise and recursively; everything else replaces.
fn merge_value(live: &mut Value, patch: &Value) {
    match (live, patch) {
        (Value::Object(live_fields), Value::Object(patch_fields)) => {
            for (key, patch_value) in patch_fields {
                match live_fields.get_mut(key) {
                    Some(live_value) => merge_value(live_value, patch_value),
                    None => {
                        live_fields.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (live, patch) => *live = patch.clone(),
    }
}

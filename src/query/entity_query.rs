//! Query session surface
//!
//! One `EntityQuery` covers one query lifecycle: a cached size probe,
//! windowed loads, batched mutations, and item construction. A query is
//! cheap to create and is meant to be discarded once its definition or
//! the underlying data changes.

use serde_json::Value;

use crate::observability::Logger;
use crate::provider::{EntityProvider, ProviderResult, QueryWindow};
use crate::query::QueryDefinition;

/// A live query session over an entity provider
pub struct EntityQuery<P> {
    definition: QueryDefinition,
    provider: P,
    cached_size: Option<usize>,
}

impl<P: EntityProvider> EntityQuery<P> {
    /// Creates a query session from a definition and a provider
    pub fn new(definition: QueryDefinition, provider: P) -> Self {
        Self {
            definition,
            provider,
            cached_size: None,
        }
    }

    pub fn definition(&self) -> &QueryDefinition {
        &self.definition
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Consumes the query and returns the provider
    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Returns the number of entities matching the query's filters
    ///
    /// The result is cached for the lifetime of the session. A batch size
    /// of zero suppresses the probe entirely and reports an empty result
    /// set without touching the provider.
    pub fn size(&mut self) -> ProviderResult<usize> {
        if self.definition.batch_size() == 0 {
            Logger::debug(
                "QUERY_SIZE_SKIPPED",
                &[("entity_type", self.definition.entity_type().name.as_str())],
            );
            return Ok(0);
        }
        if let Some(size) = self.cached_size {
            return Ok(size);
        }
        let size = self
            .provider
            .query_size(self.definition.entity_type(), self.definition.filters())?;
        Logger::debug(
            "QUERY_SIZE",
            &[
                ("entity_type", self.definition.entity_type().name.as_str()),
                ("size", &size.to_string()),
            ],
        );
        self.cached_size = Some(size);
        Ok(size)
    }

    /// Loads one window of matching entities
    ///
    /// Sorting uses the definition's active sort, falling back to its
    /// default sort when the active one is empty. A window with
    /// `count == 0` loads nothing.
    pub fn load_items(&mut self, start_index: usize, count: usize) -> ProviderResult<Vec<Value>> {
        self.provider.load_items(
            self.definition.entity_type(),
            QueryWindow::new(start_index, count),
            self.definition.detached_entities(),
            self.definition.filters(),
            self.definition.effective_sort(),
        )
    }

    /// Applies one batch of additions, modifications, and removals
    ///
    /// Invalidates the cached size; the next `size` call probes again.
    pub fn save_items(
        &mut self,
        added: &[Value],
        modified: &[Value],
        removed: &[Value],
    ) -> ProviderResult<()> {
        self.provider.save_items(
            self.definition.entity_type(),
            added,
            modified,
            removed,
            self.definition.application_managed_transactions(),
            self.definition.detached_entities(),
        )?;
        self.cached_size = None;
        Ok(())
    }

    /// Deletes every entity matching the query's filters
    ///
    /// Returns true when the delete completed. Invalidates the cached
    /// size.
    pub fn delete_all_items(&mut self) -> ProviderResult<bool> {
        let deleted = self.provider.delete_all_items(
            self.definition.application_managed_transactions(),
            self.definition.entity_type(),
            self.definition.filters(),
            self.definition.effective_sort(),
        )?;
        self.cached_size = None;
        Ok(deleted)
    }

    /// Constructs a fresh, never-persisted item from the declared defaults
    ///
    /// The identity field is left unset so the item reports as new until
    /// it is saved.
    pub fn construct_item(&self) -> Value {
        let mut record = serde_json::Map::new();
        let identity_field = &self.definition.entity_type().identity_field;
        for (property, default) in self.definition.property_defaults() {
            if property == identity_field {
                continue;
            }
            record.insert(property.clone(), default.clone());
        }
        Value::Object(record)
    }

    /// Reports whether an entity has never been persisted
    pub fn is_new_entity(&self, entity: &Value) -> bool {
        self.provider
            .is_new_entity(self.definition.entity_type(), entity)
    }
}

//! Query definitions
//!
//! A query definition carries everything the session surface needs to run
//! one query lifecycle: entity type, filters, sort with default fallback,
//! batch size, and the mutation-mode flags. Property defaults for item
//! construction are declared statically here instead of being discovered
//! through runtime introspection.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::filter::{Filter, SortSpec};
use crate::schema::EntityType;

/// Definition of one grid-backed query
#[derive(Debug, Clone)]
pub struct QueryDefinition {
    entity_type: EntityType,
    filters: Vec<Filter>,
    sort: SortSpec,
    default_sort: SortSpec,
    batch_size: usize,
    detached_entities: bool,
    application_managed_transactions: bool,
    property_defaults: BTreeMap<String, Value>,
}

impl QueryDefinition {
    /// Creates a definition with no filters, no sort, and a batch size of 50
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            filters: Vec::new(),
            sort: SortSpec::none(),
            default_sort: SortSpec::none(),
            batch_size: 50,
            detached_entities: false,
            application_managed_transactions: true,
            property_defaults: BTreeMap::new(),
        }
    }

    /// Adds a filter; all top-level filters combine with AND
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the active sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the fallback sort used when the active sort is empty
    pub fn with_default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = sort;
        self
    }

    /// Sets the batch size; zero suppresses the size probe entirely
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Marks loaded entities as detached copies
    pub fn with_detached_entities(mut self, detached: bool) -> Self {
        self.detached_entities = detached;
        self
    }

    /// Chooses who owns transaction boundaries during mutations
    ///
    /// When true the engine brackets each save/delete batch in its own
    /// transaction; when false the caller manages boundaries.
    pub fn with_application_managed_transactions(mut self, managed: bool) -> Self {
        self.application_managed_transactions = managed;
        self
    }

    /// Declares a default value for newly constructed items
    pub fn with_property_default(mut self, property: impl Into<String>, value: Value) -> Self {
        self.property_defaults.insert(property.into(), value);
        self
    }

    pub fn entity_type(&self) -> &EntityType {
        &self.entity_type
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn default_sort(&self) -> &SortSpec {
        &self.default_sort
    }

    /// Returns the active sort, falling back to the default when empty
    pub fn effective_sort(&self) -> &SortSpec {
        if self.sort.is_empty() {
            &self.default_sort
        } else {
            &self.sort
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn detached_entities(&self) -> bool {
        self.detached_entities
    }

    pub fn application_managed_transactions(&self) -> bool {
        self.application_managed_transactions
    }

    pub fn property_defaults(&self) -> &BTreeMap<String, Value> {
        &self.property_defaults
    }
}

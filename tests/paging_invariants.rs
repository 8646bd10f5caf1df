//! Paging Invariant Tests
//!
//! Tests for the paged query engine:
//! - Adjacent windows tile the result set with no duplicates and no gaps
//! - Repeated loads over an unmutated store are deterministic
//! - Sort is stable and falls back to the default specification
//! - Zero batch size suppresses the size probe

use lazyquery::filter::{Filter, SortSpec};
use lazyquery::provider::StoreEntityProvider;
use lazyquery::query::{EntityQuery, QueryDefinition};
use lazyquery::schema::{EntityType, FieldDef};
use lazyquery::store::{EntityStore, MemoryStore};
use serde_json::json;
use std::collections::HashMap;

// =============================================================================
// Helper Functions
// =============================================================================

fn person_type() -> EntityType {
    let mut fields = HashMap::new();
    fields.insert("name".to_string(), FieldDef::required_string());
    fields.insert("age".to_string(), FieldDef::required_int());
    EntityType::new("person", fields)
}

/// Seeds `count` rows with identities p00..pNN and ages 20..20+count
fn seeded_query(count: usize, definition: QueryDefinition) -> EntityQuery<StoreEntityProvider<MemoryStore>> {
    let entity_type = person_type();
    let mut store = MemoryStore::new();
    for i in 0..count {
        store
            .insert(
                &entity_type,
                json!({
                    "_id": format!("p{:02}", i),
                    "name": format!("person {:02}", i),
                    "age": 20 + i,
                }),
            )
            .unwrap();
    }
    EntityQuery::new(definition, StoreEntityProvider::new(store))
}

fn ids(items: &[serde_json::Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| item["_id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Window Tiling Tests
// =============================================================================

/// Windows (0,10), (10,10), (20,10) over 25 rows cover every row exactly once.
#[test]
fn test_adjacent_windows_tile_without_gaps_or_duplicates() {
    let mut query = seeded_query(25, QueryDefinition::new(person_type()));

    let mut seen = Vec::new();
    for start in [0, 10, 20] {
        seen.extend(ids(&query.load_items(start, 10).unwrap()));
    }

    assert_eq!(seen.len(), 25);
    let mut sorted = seen.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 25);
}

/// The last window truncates at the end of the result set.
#[test]
fn test_final_window_truncates() {
    let mut query = seeded_query(25, QueryDefinition::new(person_type()));
    assert_eq!(query.load_items(20, 10).unwrap().len(), 5);
}

/// A window starting past the end is empty.
#[test]
fn test_window_past_end_is_empty() {
    let mut query = seeded_query(5, QueryDefinition::new(person_type()));
    assert!(query.load_items(50, 10).unwrap().is_empty());
}

/// A zero-count window loads nothing.
#[test]
fn test_zero_count_window_is_empty() {
    let mut query = seeded_query(5, QueryDefinition::new(person_type()));
    assert!(query.load_items(0, 0).unwrap().is_empty());
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// The same window over an unmutated store returns the same rows in the
/// same order, with or without an explicit sort.
#[test]
fn test_repeated_loads_are_deterministic() {
    for sort in [SortSpec::none(), SortSpec::desc("age")] {
        let mut query = seeded_query(
            25,
            QueryDefinition::new(person_type()).with_sort(sort),
        );
        let first = query.load_items(5, 10).unwrap();
        for _ in 0..10 {
            assert_eq!(query.load_items(5, 10).unwrap(), first);
        }
    }
}

/// With no sort at all, rows come back in identity order.
#[test]
fn test_unsorted_load_is_identity_ordered() {
    let mut query = seeded_query(5, QueryDefinition::new(person_type()));
    assert_eq!(
        ids(&query.load_items(0, 5).unwrap()),
        ["p00", "p01", "p02", "p03", "p04"]
    );
}

// =============================================================================
// Sort Tests
// =============================================================================

/// Equal sort keys keep their identity order (stable sort).
#[test]
fn test_sort_is_stable_for_equal_keys() {
    let entity_type = person_type();
    let mut store = MemoryStore::new();
    for id in ["a", "b", "c"] {
        store
            .insert(&entity_type, json!({"_id": id, "name": "same", "age": 30}))
            .unwrap();
    }
    let mut query = EntityQuery::new(
        QueryDefinition::new(person_type()).with_sort(SortSpec::asc("name")),
        StoreEntityProvider::new(store),
    );

    assert_eq!(ids(&query.load_items(0, 3).unwrap()), ["a", "b", "c"]);
}

/// The default sort applies only while the active sort is empty.
#[test]
fn test_default_sort_fallback() {
    let mut query = seeded_query(
        3,
        QueryDefinition::new(person_type()).with_default_sort(SortSpec::desc("age")),
    );
    assert_eq!(ids(&query.load_items(0, 3).unwrap()), ["p02", "p01", "p00"]);
}

/// A sort on an unresolvable property fails before any row is read.
#[test]
fn test_unresolvable_sort_property_fails() {
    let mut query = seeded_query(
        3,
        QueryDefinition::new(person_type()).with_sort(SortSpec::asc("no_such_field")),
    );
    assert!(query.load_items(0, 3).is_err());
}

// =============================================================================
// Size Probe Tests
// =============================================================================

/// Size counts only the rows matching the filters.
#[test]
fn test_size_respects_filters() {
    let mut query = seeded_query(
        25,
        QueryDefinition::new(person_type()).with_filter(Filter::lt("age", json!(25))),
    );
    assert_eq!(query.size().unwrap(), 5);
}

/// Zero batch size reports an empty result set without probing.
#[test]
fn test_zero_batch_size_short_circuits() {
    let mut query = seeded_query(
        25,
        QueryDefinition::new(person_type()).with_batch_size(0),
    );
    assert_eq!(query.size().unwrap(), 0);
}

/// Save invalidates the cached size.
#[test]
fn test_size_refreshes_after_save() {
    let mut query = seeded_query(3, QueryDefinition::new(person_type()));
    assert_eq!(query.size().unwrap(), 3);

    query
        .save_items(&[json!({"name": "new", "age": 99})], &[], &[])
        .unwrap();
    assert_eq!(query.size().unwrap(), 4);
}

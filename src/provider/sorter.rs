//! Result sorting
//!
//! Compiles a sort specification into resolved order-by keys and applies
//! them with a stable sort. Records enter in store scan order (identity
//! order), so an empty specification still yields a deterministic,
//! page-stable ordering.

use serde_json::Value;
use std::cmp::Ordering;

use crate::compiler::{compare_values, CompileResult};
use crate::filter::{SortDirection, SortSpec};
use crate::path::{resolve, ResolvedPath};
use crate::schema::EntityType;

/// A sort specification with every property path resolved
#[derive(Debug, Clone)]
pub struct CompiledSort {
    keys: Vec<(ResolvedPath, SortDirection)>,
}

impl CompiledSort {
    /// Resolves every sort key against the entity type
    ///
    /// Fails fast on the first unresolvable property, the same way the
    /// filter compiler does.
    pub fn compile(entity_type: &EntityType, spec: &SortSpec) -> CompileResult<Self> {
        let mut keys = Vec::with_capacity(spec.keys().len());
        for key in spec.keys() {
            let path = resolve(entity_type, &key.property)?;
            keys.push((path, key.direction));
        }
        Ok(Self { keys })
    }

    /// Returns true if no keys are present (scan order applies)
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sorts records in place, stable, earlier keys dominating
    pub fn sort(&self, records: &mut [Value]) {
        if self.keys.is_empty() {
            return;
        }
        records.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        for (path, direction) in &self.keys {
            let ordering = compare_optional(path.lookup(a), path.lookup(b));
            let ordering = match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Absent values sort before present ones
fn compare_optional(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a_val), Some(b_val)) => compare_values(a_val, b_val),
    }
}

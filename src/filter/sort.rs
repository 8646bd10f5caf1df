//! Sort specification
//!
//! An ordered list of property/direction keys. One list of keyed pairs
//! rather than parallel property and direction arrays, so the keys cannot
//! fall out of alignment.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One sort key: a dotted property path and a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Dotted property path
    pub property: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// A sort specification: keys applied in order, earlier keys dominating
///
/// An empty specification is a defined state meaning "caller default
/// ordering applies"; the session surface substitutes its default sort
/// before the engine ever sees an empty spec, and the engine treats a
/// still-empty spec as "store scan order".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Creates an empty specification (caller default ordering)
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a single ascending key
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            keys: vec![SortKey::asc(property)],
        }
    }

    /// Creates a single descending key
    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            keys: vec![SortKey::desc(property)],
        }
    }

    /// Appends an ascending key
    pub fn then_asc(mut self, property: impl Into<String>) -> Self {
        self.keys.push(SortKey::asc(property));
        self
    }

    /// Appends a descending key
    pub fn then_desc(mut self, property: impl Into<String>) -> Self {
        self.keys.push(SortKey::desc(property));
        self
    }

    /// Returns the sort keys in priority order
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns true if no keys are present
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_is_default_ordering() {
        assert!(SortSpec::none().is_empty());
        assert!(SortSpec::default().is_empty());
    }

    #[test]
    fn test_key_order_preserved() {
        let spec = SortSpec::asc("lastName").then_desc("age").then_asc("_id");
        let keys = spec.keys();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0], SortKey::asc("lastName"));
        assert_eq!(keys[1], SortKey::desc("age"));
        assert_eq!(keys[2], SortKey::asc("_id"));
    }
}

//! Filter expression AST
//!
//! An immutable tree describing a boolean restriction over entity
//! properties. The tree is data only: translation semantics (case folding,
//! null handling, range inclusivity) live in the compiler.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operators for [`Filter::Compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Equals
    #[serde(rename = "eq")]
    Eq,
    /// Greater than
    #[serde(rename = "gt")]
    Gt,
    /// Greater than or equal
    #[serde(rename = "gte")]
    Ge,
    /// Less than
    #[serde(rename = "lt")]
    Lt,
    /// Less than or equal
    #[serde(rename = "lte")]
    Le,
}

impl CompareOp {
    /// Returns the operator name for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Gt => "gt",
            CompareOp::Ge => "gte",
            CompareOp::Lt => "lt",
            CompareOp::Le => "lte",
        }
    }
}

/// A filter expression node
///
/// `And`/`Or` are n-ary; the compiler guarantees that a single-child
/// conjunction compiles to the child alone, so builders are free to nest
/// without worrying about wrapper cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    /// All children must match
    And {
        /// Child filters, combined left to right
        children: Vec<Filter>,
    },
    /// At least one child must match
    Or {
        /// Child filters, combined left to right
        children: Vec<Filter>,
    },
    /// Child must not match
    Not {
        /// Negated child filter
        child: Box<Filter>,
    },
    /// Property compares against a value
    Compare {
        /// Dotted property path
        property: String,
        /// Comparison operator
        op: CompareOp,
        /// Comparison operand
        value: Value,
    },
    /// Property falls in an inclusive range
    Between {
        /// Dotted property path
        property: String,
        /// Inclusive lower bound
        start: Value,
        /// Inclusive upper bound
        end: Value,
    },
    /// Property is null or absent
    IsNull {
        /// Dotted property path
        property: String,
    },
    /// Property matches a `%`/`_` wildcard pattern
    Like {
        /// Dotted property path
        property: String,
        /// Wildcard pattern
        pattern: String,
        /// Whether matching is case sensitive
        case_sensitive: bool,
    },
    /// Property contains a substring (always case-insensitive)
    Contains {
        /// Dotted property path
        property: String,
        /// Substring to look for
        substring: String,
    },
    /// Property is a member of a value list
    In {
        /// Dotted property path
        property: String,
        /// Candidate values
        values: Vec<Value>,
        /// Whether string membership is case sensitive
        case_sensitive: bool,
    },
}

impl Filter {
    /// Create a conjunction of filters
    pub fn and(children: Vec<Filter>) -> Self {
        Filter::And { children }
    }

    /// Create a disjunction of filters
    pub fn or(children: Vec<Filter>) -> Self {
        Filter::Or { children }
    }

    /// Negate a filter
    pub fn not(child: Filter) -> Self {
        Filter::Not {
            child: Box::new(child),
        }
    }

    /// Create a comparison filter
    pub fn compare(property: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Filter::Compare {
            property: property.into(),
            op,
            value,
        }
    }

    /// Create an equality filter
    pub fn eq(property: impl Into<String>, value: Value) -> Self {
        Self::compare(property, CompareOp::Eq, value)
    }

    /// Create a greater-than filter
    pub fn gt(property: impl Into<String>, value: Value) -> Self {
        Self::compare(property, CompareOp::Gt, value)
    }

    /// Create a greater-or-equal filter
    pub fn ge(property: impl Into<String>, value: Value) -> Self {
        Self::compare(property, CompareOp::Ge, value)
    }

    /// Create a less-than filter
    pub fn lt(property: impl Into<String>, value: Value) -> Self {
        Self::compare(property, CompareOp::Lt, value)
    }

    /// Create a less-or-equal filter
    pub fn le(property: impl Into<String>, value: Value) -> Self {
        Self::compare(property, CompareOp::Le, value)
    }

    /// Create an inclusive range filter
    pub fn between(property: impl Into<String>, start: Value, end: Value) -> Self {
        Filter::Between {
            property: property.into(),
            start,
            end,
        }
    }

    /// Create a null test filter
    pub fn is_null(property: impl Into<String>) -> Self {
        Filter::IsNull {
            property: property.into(),
        }
    }

    /// Create a case-sensitive pattern filter
    pub fn like(property: impl Into<String>, pattern: impl Into<String>) -> Self {
        Filter::Like {
            property: property.into(),
            pattern: pattern.into(),
            case_sensitive: true,
        }
    }

    /// Create a case-insensitive pattern filter
    pub fn like_ci(property: impl Into<String>, pattern: impl Into<String>) -> Self {
        Filter::Like {
            property: property.into(),
            pattern: pattern.into(),
            case_sensitive: false,
        }
    }

    /// Create a substring filter (always case-insensitive)
    pub fn contains(property: impl Into<String>, substring: impl Into<String>) -> Self {
        Filter::Contains {
            property: property.into(),
            substring: substring.into(),
        }
    }

    /// Create a case-sensitive membership filter
    pub fn in_list(property: impl Into<String>, values: Vec<Value>) -> Self {
        Filter::In {
            property: property.into(),
            values,
            case_sensitive: true,
        }
    }

    /// Create a case-insensitive membership filter
    pub fn in_list_ci(property: impl Into<String>, values: Vec<Value>) -> Self {
        Filter::In {
            property: property.into(),
            values,
            case_sensitive: false,
        }
    }

    /// Returns the filter kind name for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Filter::And { .. } => "and",
            Filter::Or { .. } => "or",
            Filter::Not { .. } => "not",
            Filter::Compare { .. } => "compare",
            Filter::Between { .. } => "between",
            Filter::IsNull { .. } => "is_null",
            Filter::Like { .. } => "like",
            Filter::Contains { .. } => "contains",
            Filter::In { .. } => "in",
        }
    }
}

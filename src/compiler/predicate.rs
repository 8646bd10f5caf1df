//! Compiled predicates
//!
//! The executable output of the filter compiler. Composite nodes are
//! binary so the left-balanced fold shape produced by the compiler is
//! observable; evaluation is pure and allocation-free apart from case
//! folding.

use serde_json::Value;
use std::cmp::Ordering;

use crate::filter::CompareOp;
use crate::path::ResolvedPath;

use super::like::like_match;
use super::ordering::{compare_values, same_orderable_kind};

/// A compiled, executable predicate over entity records
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// No restriction: every record matches
    True,
    /// Both operands must match
    And(Box<Predicate>, Box<Predicate>),
    /// Either operand must match
    Or(Box<Predicate>, Box<Predicate>),
    /// Operand must not match
    Not(Box<Predicate>),
    /// Property compares against an operand
    Compare {
        /// Resolved property path
        path: ResolvedPath,
        /// Comparison operator
        op: CompareOp,
        /// Comparison operand
        value: Value,
    },
    /// Property falls in an inclusive range
    Between {
        /// Resolved property path
        path: ResolvedPath,
        /// Inclusive lower bound
        start: Value,
        /// Inclusive upper bound
        end: Value,
    },
    /// Property is null or absent
    IsNull {
        /// Resolved property path
        path: ResolvedPath,
    },
    /// Property matches a wildcard pattern
    Like {
        /// Resolved property path
        path: ResolvedPath,
        /// Pattern, already lower-cased for insensitive matching
        pattern: String,
        /// Whether matching is case sensitive
        case_sensitive: bool,
    },
    /// Property is a member of a value list
    In {
        /// Resolved property path
        path: ResolvedPath,
        /// Candidate values, strings already lower-cased when insensitive
        values: Vec<Value>,
        /// Whether string membership is case sensitive
        case_sensitive: bool,
    },
}

impl Predicate {
    /// Combines two predicates with a conjunction
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(Box::new(left), Box::new(right))
    }

    /// Combines two predicates with a disjunction
    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    /// Negates a predicate
    pub fn not(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }

    /// Evaluates this predicate against a record
    ///
    /// Null handling: a missing or null property never satisfies a
    /// comparison, range, pattern, or membership test; only `IsNull`
    /// treats absence as a match.
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Predicate::True => true,
            Predicate::And(left, right) => left.matches(record) && right.matches(record),
            Predicate::Or(left, right) => left.matches(record) || right.matches(record),
            Predicate::Not(inner) => !inner.matches(record),
            Predicate::Compare { path, op, value } => match path.lookup(record) {
                Some(actual) => compare_match(actual, *op, value),
                None => false,
            },
            Predicate::Between { path, start, end } => match path.lookup(record) {
                Some(actual) => {
                    same_orderable_kind(actual, start)
                        && same_orderable_kind(actual, end)
                        && compare_values(actual, start) != Ordering::Less
                        && compare_values(actual, end) != Ordering::Greater
                }
                None => false,
            },
            Predicate::IsNull { path } => path.lookup(record).is_none(),
            Predicate::Like {
                path,
                pattern,
                case_sensitive,
            } => match path.lookup(record) {
                Some(Value::String(actual)) => {
                    if *case_sensitive {
                        like_match(actual, pattern)
                    } else {
                        like_match(&actual.to_lowercase(), pattern)
                    }
                }
                _ => false,
            },
            Predicate::In {
                path,
                values,
                case_sensitive,
            } => match path.lookup(record) {
                Some(actual) => values.iter().any(|candidate| {
                    if !case_sensitive {
                        if let (Value::String(a), Value::String(c)) = (actual, candidate) {
                            return a.to_lowercase() == *c;
                        }
                    }
                    same_orderable_kind(actual, candidate)
                        && compare_values(actual, candidate) == Ordering::Equal
                }),
                None => false,
            },
        }
    }
}

/// Evaluates a single comparison with strict kind matching (no coercion)
fn compare_match(actual: &Value, op: CompareOp, expected: &Value) -> bool {
    if !same_orderable_kind(actual, expected) {
        return false;
    }
    let ordering = compare_values(actual, expected);
    match op {
        CompareOp::Eq => ordering == Ordering::Equal,
        CompareOp::Gt => ordering == Ordering::Greater,
        CompareOp::Ge => ordering != Ordering::Less,
        CompareOp::Lt => ordering == Ordering::Less,
        CompareOp::Le => ordering != Ordering::Greater,
    }
}

//! Value ordering shared by predicate evaluation and result sorting
//!
//! Ordering rules:
//! - null < bool < number < string < array < object (type rank first)
//! - For same types, natural ordering
//! - Numbers compare as i64 when both sides are integral, as f64 otherwise

use serde_json::Value;
use std::cmp::Ordering;

/// Returns the JSON kind name for error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true if the value participates in comparison operators
///
/// Only booleans, numbers, and strings are mutually ordered within their
/// kind; null, arrays, and objects are not valid comparison operands.
pub fn is_orderable(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

/// Returns true if both values are of the same orderable kind
pub fn same_orderable_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Bool(_), Value::Bool(_))
            | (Value::Number(_), Value::Number(_))
            | (Value::String(_), Value::String(_))
    )
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Compares two values under the total order above
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let a_rank = type_rank(a);
    let b_rank = type_rank(b);
    if a_rank != b_rank {
        return a_rank.cmp(&b_rank);
    }

    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
        (Value::Number(a_n), Value::Number(b_n)) => {
            if let (Some(a_i), Some(b_i)) = (a_n.as_i64(), b_n.as_i64()) {
                return a_i.cmp(&b_i);
            }
            let a_f = a_n.as_f64().unwrap_or(0.0);
            let b_f = b_n.as_f64().unwrap_or(0.0);
            a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
        }
        (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
        // Arrays and objects are never operands; rank equality is enough
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_rank_order() {
        assert_eq!(compare_values(&json!(null), &json!(false)), Ordering::Less);
        assert_eq!(compare_values(&json!(true), &json!(0)), Ordering::Less);
        assert_eq!(compare_values(&json!(9), &json!("a")), Ordering::Less);
    }

    #[test]
    fn test_integer_comparison_is_exact() {
        let big = i64::MAX;
        let smaller = i64::MAX - 1;
        assert_eq!(
            compare_values(&json!(smaller), &json!(big)),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_numeric_comparison() {
        assert_eq!(compare_values(&json!(2), &json!(2.5)), Ordering::Less);
        assert_eq!(compare_values(&json!(3.0), &json!(3)), Ordering::Equal);
    }

    #[test]
    fn test_orderability() {
        assert!(is_orderable(&json!("x")));
        assert!(is_orderable(&json!(1)));
        assert!(is_orderable(&json!(true)));
        assert!(!is_orderable(&json!(null)));
        assert!(!is_orderable(&json!([1, 2])));
        assert!(!is_orderable(&json!({"a": 1})));
    }
}

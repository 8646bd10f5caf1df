//! Recursive filter-to-predicate translation
//!
//! A pure transform: input filter tree, output executable predicate, no
//! state beyond the call stack. Composite nodes fold left so the backend
//! sees a left-balanced binary tree; a single-child composite compiles to
//! the child alone.

use serde_json::Value;

use crate::filter::Filter;
use crate::path::{resolve, ResolvedPath};
use crate::schema::{EntityType, FieldType};

use super::errors::{CompileError, CompileResult};
use super::ordering::{is_orderable, kind_name};
use super::predicate::Predicate;

/// Compiles a top-level filter list into one predicate
///
/// Zero filters compile to the unconditional predicate; one filter
/// compiles alone; several fold into a left-balanced conjunction.
pub fn compile_filters(entity_type: &EntityType, filters: &[Filter]) -> CompileResult<Predicate> {
    match filters {
        [] => Ok(Predicate::True),
        [single] => compile(entity_type, single),
        [first, rest @ ..] => {
            let mut predicate = compile(entity_type, first)?;
            for filter in rest {
                predicate = Predicate::and(predicate, compile(entity_type, filter)?);
            }
            Ok(predicate)
        }
    }
}

/// Compiles one filter node into a predicate
pub fn compile(entity_type: &EntityType, filter: &Filter) -> CompileResult<Predicate> {
    match filter {
        Filter::And { children } => compile_composite(entity_type, children, "and", Predicate::and),
        Filter::Or { children } => compile_composite(entity_type, children, "or", Predicate::or),

        Filter::Not { child } => Ok(Predicate::not(compile(entity_type, child)?)),

        Filter::Compare {
            property,
            op,
            value,
        } => {
            let path = resolve_checked(entity_type, property, op.as_str(), value)?;
            Ok(Predicate::Compare {
                path,
                op: *op,
                value: value.clone(),
            })
        }

        Filter::Between {
            property,
            start,
            end,
        } => {
            let path = resolve_checked(entity_type, property, "between", start)?;
            check_operand(&path, property, "between", end)?;
            Ok(Predicate::Between {
                path,
                start: start.clone(),
                end: end.clone(),
            })
        }

        Filter::IsNull { property } => {
            let path = resolve(entity_type, property)?;
            Ok(Predicate::IsNull { path })
        }

        Filter::Like {
            property,
            pattern,
            case_sensitive,
        } => compile_like(entity_type, property, pattern, *case_sensitive, "like"),

        // Substring convenience: always case-insensitive, wildcards on both sides
        Filter::Contains {
            property,
            substring,
        } => compile_like(
            entity_type,
            property,
            &format!("%{}%", substring),
            false,
            "contains",
        ),

        Filter::In {
            property,
            values,
            case_sensitive,
        } => {
            let path = resolve(entity_type, property)?;
            let mut members = Vec::with_capacity(values.len());
            for value in values {
                check_operand(&path, property, "in", value)?;
                members.push(fold_case(value, *case_sensitive));
            }
            Ok(Predicate::In {
                path,
                values: members,
                case_sensitive: *case_sensitive,
            })
        }
    }
}

/// Left-fold for n-ary composites
///
/// The fold order is associativity-neutral logically, but the shape is
/// pinned down: combine the first two children, then fold each subsequent
/// child into the running predicate.
fn compile_composite(
    entity_type: &EntityType,
    children: &[Filter],
    kind: &'static str,
    combine: fn(Predicate, Predicate) -> Predicate,
) -> CompileResult<Predicate> {
    match children {
        [] => Err(CompileError::EmptyComposite { kind }),
        [single] => compile(entity_type, single),
        [first, second, rest @ ..] => {
            let mut predicate = combine(
                compile(entity_type, first)?,
                compile(entity_type, second)?,
            );
            for child in rest {
                predicate = combine(predicate, compile(entity_type, child)?);
            }
            Ok(predicate)
        }
    }
}

fn compile_like(
    entity_type: &EntityType,
    property: &str,
    pattern: &str,
    case_sensitive: bool,
    op: &'static str,
) -> CompileResult<Predicate> {
    let path = resolve(entity_type, property)?;
    if !matches!(path.terminal_type(), FieldType::String) {
        return Err(CompileError::PatternOnNonText {
            property: property.to_string(),
            op,
            field_type: path.terminal_type().type_name(),
        });
    }
    // Insensitive matching lowers both sides: the pattern here, the field
    // value at match time.
    let pattern = if case_sensitive {
        pattern.to_string()
    } else {
        pattern.to_lowercase()
    };
    Ok(Predicate::Like {
        path,
        pattern,
        case_sensitive,
    })
}

fn resolve_checked(
    entity_type: &EntityType,
    property: &str,
    op: &'static str,
    value: &Value,
) -> CompileResult<ResolvedPath> {
    let path = resolve(entity_type, property)?;
    check_operand(&path, property, op, value)?;
    Ok(path)
}

/// Validates that an operand is orderable and matches the property's type
fn check_operand(
    path: &ResolvedPath,
    property: &str,
    op: &'static str,
    value: &Value,
) -> CompileResult<()> {
    if !is_orderable(value) {
        return Err(CompileError::IncomparableOperand {
            property: property.to_string(),
            op,
            value_kind: kind_name(value),
        });
    }
    let compatible = matches!(
        (path.terminal_type(), value),
        (FieldType::String, Value::String(_))
            | (FieldType::Int, Value::Number(_))
            | (FieldType::Float, Value::Number(_))
            | (FieldType::Bool, Value::Bool(_))
    );
    if !compatible {
        return Err(CompileError::OperandTypeMismatch {
            property: property.to_string(),
            field_type: path.terminal_type().type_name(),
            value_kind: kind_name(value),
        });
    }
    Ok(())
}

fn fold_case(value: &Value, case_sensitive: bool) -> Value {
    match value {
        Value::String(s) if !case_sensitive => Value::String(s.to_lowercase()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CompareOp;
    use crate::path::PathError;
    use crate::schema::FieldDef;
    use serde_json::json;
    use std::collections::HashMap;

    fn person_type() -> EntityType {
        let mut address_fields = HashMap::new();
        address_fields.insert("city".to_string(), FieldDef::required_string());

        let mut fields = HashMap::new();
        fields.insert("name".to_string(), FieldDef::required_string());
        fields.insert("age".to_string(), FieldDef::optional_int());
        fields.insert(
            "address".to_string(),
            FieldDef::optional_object(address_fields),
        );
        EntityType::new("person", fields)
    }

    #[test]
    fn test_empty_filter_list_is_unrestricted() {
        let predicate = compile_filters(&person_type(), &[]).unwrap();
        assert_eq!(predicate, Predicate::True);
        assert!(predicate.matches(&json!({"anything": 1})));
    }

    #[test]
    fn test_single_filter_list_compiles_without_wrapping() {
        let filter = Filter::eq("name", json!("Alice"));
        let from_list = compile_filters(&person_type(), &[filter.clone()]).unwrap();
        let direct = compile(&person_type(), &filter).unwrap();
        assert_eq!(from_list, direct);
    }

    #[test]
    fn test_single_child_composites_compile_to_child() {
        let entity_type = person_type();
        let child = Filter::eq("name", json!("Alice"));
        let direct = compile(&entity_type, &child).unwrap();

        let and_wrapped = compile(&entity_type, &Filter::and(vec![child.clone()])).unwrap();
        let or_wrapped = compile(&entity_type, &Filter::or(vec![child.clone()])).unwrap();
        assert_eq!(and_wrapped, direct);
        assert_eq!(or_wrapped, direct);
    }

    #[test]
    fn test_left_balanced_fold_shape() {
        let entity_type = person_type();
        let a = Filter::eq("name", json!("a"));
        let b = Filter::eq("name", json!("b"));
        let c = Filter::eq("name", json!("c"));

        let compiled = compile(&entity_type, &Filter::and(vec![a.clone(), b.clone(), c.clone()]))
            .unwrap();

        let expected = Predicate::and(
            Predicate::and(
                compile(&entity_type, &a).unwrap(),
                compile(&entity_type, &b).unwrap(),
            ),
            compile(&entity_type, &c).unwrap(),
        );
        assert_eq!(compiled, expected);
    }

    #[test]
    fn test_empty_composite_is_an_error() {
        let err = compile(&person_type(), &Filter::and(vec![])).unwrap_err();
        assert_eq!(err, CompileError::EmptyComposite { kind: "and" });
    }

    #[test]
    fn test_double_negation_is_logically_equivalent() {
        let entity_type = person_type();
        let inner = Filter::gt("age", json!(21));
        let double = Filter::not(Filter::not(inner.clone()));

        let direct = compile(&entity_type, &inner).unwrap();
        let negated = compile(&entity_type, &double).unwrap();

        let records = [
            json!({"age": 20}),
            json!({"age": 21}),
            json!({"age": 22}),
            json!({"age": null}),
            json!({}),
        ];
        for record in &records {
            assert_eq!(direct.matches(record), negated.matches(record));
        }
    }

    #[test]
    fn test_contains_rewrites_to_insensitive_like() {
        let entity_type = person_type();
        let contains = compile(&entity_type, &Filter::contains("name", "AB")).unwrap();
        let like = compile(&entity_type, &Filter::like_ci("name", "%AB%")).unwrap();
        assert_eq!(contains, like);

        assert!(contains.matches(&json!({"name": "drab"})));
        assert!(contains.matches(&json!({"name": "ABBA"})));
        assert!(!contains.matches(&json!({"name": "acb"})));
    }

    #[test]
    fn test_insensitive_like_lowers_pattern_at_compile_time() {
        let compiled = compile(&person_type(), &Filter::like_ci("name", "%SMITH%")).unwrap();
        match compiled {
            Predicate::Like { pattern, .. } => assert_eq!(pattern, "%smith%"),
            other => panic!("expected Like, got {:?}", other),
        }
    }

    #[test]
    fn test_sensitive_like_keeps_pattern() {
        let compiled = compile(&person_type(), &Filter::like("name", "%Smith%")).unwrap();
        match compiled {
            Predicate::Like {
                pattern,
                case_sensitive,
                ..
            } => {
                assert_eq!(pattern, "%Smith%");
                assert!(case_sensitive);
            }
            other => panic!("expected Like, got {:?}", other),
        }
    }

    #[test]
    fn test_like_on_non_string_property_fails() {
        let err = compile(&person_type(), &Filter::like_ci("age", "%1%")).unwrap_err();
        assert_eq!(
            err,
            CompileError::PatternOnNonText {
                property: "age".to_string(),
                op: "like",
                field_type: "int",
            }
        );
    }

    #[test]
    fn test_incomparable_operand_fails() {
        let err = compile(&person_type(), &Filter::gt("age", json!([1, 2]))).unwrap_err();
        assert_eq!(
            err,
            CompileError::IncomparableOperand {
                property: "age".to_string(),
                op: "gt",
                value_kind: "array",
            }
        );

        let err = compile(&person_type(), &Filter::eq("name", json!(null))).unwrap_err();
        assert!(matches!(err, CompileError::IncomparableOperand { .. }));
    }

    #[test]
    fn test_operand_type_mismatch_fails() {
        let err = compile(&person_type(), &Filter::eq("age", json!("thirty"))).unwrap_err();
        assert_eq!(
            err,
            CompileError::OperandTypeMismatch {
                property: "age".to_string(),
                field_type: "int",
                value_kind: "string",
            }
        );
    }

    #[test]
    fn test_between_checks_both_bounds() {
        let err = compile(
            &person_type(),
            &Filter::between("age", json!(1), json!("five")),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::OperandTypeMismatch { .. }));
    }

    #[test]
    fn test_in_compiles_to_membership() {
        let entity_type = person_type();
        let compiled = compile(
            &entity_type,
            &Filter::in_list_ci("name", vec![json!("Alice"), json!("Bob")]),
        )
        .unwrap();
        // Insensitive membership lowers the member list at compile time
        match &compiled {
            Predicate::In { values, .. } => {
                assert_eq!(values, &vec![json!("alice"), json!("bob")]);
            }
            other => panic!("expected In, got {:?}", other),
        }
        assert!(compiled.matches(&json!({"name": "ALICE"})));
        assert!(!compiled.matches(&json!({"name": "Carol"})));
    }

    #[test]
    fn test_unresolvable_path_fails_fast() {
        let err = compile(
            &person_type(),
            &Filter::eq("address.unknownField", json!("x")),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CompileError::Path(PathError::UnknownSegment {
                segment: "unknownField".to_string(),
                resolved_against: "person.address".to_string(),
            })
        );
    }

    #[test]
    fn test_nested_path_comparison() {
        let compiled = compile(
            &person_type(),
            &Filter::eq("address.city", json!("Helsinki")),
        )
        .unwrap();
        assert!(compiled.matches(&json!({"address": {"city": "Helsinki"}})));
        assert!(!compiled.matches(&json!({"address": {"city": "Oslo"}})));
        assert!(!compiled.matches(&json!({})));
    }

    #[test]
    fn test_or_evaluation() {
        let compiled = compile(
            &person_type(),
            &Filter::or(vec![
                Filter::eq("name", json!("Alice")),
                Filter::ge("age", json!(65)),
            ]),
        )
        .unwrap();
        assert!(compiled.matches(&json!({"name": "Alice", "age": 30})));
        assert!(compiled.matches(&json!({"name": "Bob", "age": 70})));
        assert!(!compiled.matches(&json!({"name": "Bob", "age": 30})));
    }

    #[test]
    fn test_compare_op_eval() {
        let entity_type = person_type();
        let record = json!({"age": 30});
        for (op, value, expected) in [
            (CompareOp::Eq, 30, true),
            (CompareOp::Gt, 29, true),
            (CompareOp::Gt, 30, false),
            (CompareOp::Ge, 30, true),
            (CompareOp::Lt, 31, true),
            (CompareOp::Lt, 30, false),
            (CompareOp::Le, 30, true),
        ] {
            let compiled =
                compile(&entity_type, &Filter::compare("age", op, json!(value))).unwrap();
            assert_eq!(compiled.matches(&record), expected, "op {:?} {}", op, value);
        }
    }
}

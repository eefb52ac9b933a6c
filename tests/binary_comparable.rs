//! Binary Comparable Operator Tests
//!
//! Whichever operand of an ordering comparison is not comparable, the
//! failure names the parameter's property path.

use std::sync::Arc;

use repoquery::operators::{ComparableMatcher, Comparing};
use repoquery::query::{Comparable, Parameter};
use repoquery::{Operator, OperatorContext};
use serde_json::{json, Value};

fn comparable_operator() -> Arc<Operator> {
    OperatorContext::shared().by_suffix("GreaterThan").unwrap()
}

fn parameter() -> Parameter {
    Parameter::plain("x.y.z", vec![0], comparable_operator())
}

fn assert_fails_on_path(value: &Value, argument: &Value) {
    let parameter = parameter();
    let err = parameter
        .operator()
        .matches(&parameter, value, &[argument])
        .unwrap_err();

    assert_eq!(err.code(), "QUERY_ARGUMENT_TYPE");
    assert_eq!(err.path(), Some("x.y.z"));
    assert!(err.to_string().contains("x.y.z"));
}

#[test]
fn test_non_comparable_value() {
    assert_fails_on_path(&json!({"nested": true}), &json!(1));
}

#[test]
fn test_non_comparable_argument() {
    assert_fails_on_path(&json!(1), &json!([1, 2]));
}

#[test]
fn test_both_non_comparable() {
    assert_fails_on_path(&json!({}), &json!([]));
}

#[test]
fn test_null_operand_is_not_comparable() {
    assert_fails_on_path(&Value::Null, &json!(1));
    assert_fails_on_path(&json!(1), &Value::Null);
}

#[test]
fn test_comparable_operands_evaluate() {
    let parameter = parameter();
    let operator = parameter.operator();
    assert!(operator.matches(&parameter, &json!(5), &[&json!(3)]).unwrap());
    assert!(!operator.matches(&parameter, &json!("a"), &[&json!("b")]).unwrap());
}

/// Equal to the first bound, within an absolute tolerance of one.
#[derive(Debug)]
struct Near;

impl ComparableMatcher for Near {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        match (value, bounds.first()) {
            (Comparable::Number(value), Some(Comparable::Number(bound))) => {
                match (value.as_f64(), bound.as_f64()) {
                    (Some(value), Some(bound)) => (value - bound).abs() <= 1.0,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

#[test]
fn test_custom_comparable_operator() {
    let mut context = OperatorContext::with_builtins();
    let near = context
        .register(Operator::new("NEAR", 1, &["Near", "IsNear"], Comparing(Near)))
        .unwrap();
    let parameter = Parameter::plain("x.y.z", vec![0], Arc::clone(&near));

    assert!(near.matches(&parameter, &json!(10), &[&json!(10.5)]).unwrap());
    assert!(!near.matches(&parameter, &json!(10), &[&json!(12)]).unwrap());

    let err = near
        .matches(&parameter, &json!({}), &[&json!(10)])
        .unwrap_err();
    assert_eq!(err.path(), Some("x.y.z"));

    assert_eq!(context.by_suffix("IsNear").unwrap().name(), "NEAR");
}

#[test]
fn test_custom_operator_token_conflict() {
    let mut context = OperatorContext::with_builtins();
    let err = context
        .register(Operator::new("SHADOW", 1, &["GreaterThan"], Comparing(Near)))
        .unwrap_err();
    assert_eq!(err.code(), "QUERY_OPERATOR_CONFLICT");
}

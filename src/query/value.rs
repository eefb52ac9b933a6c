//! Record capabilities and the ordering tag for property values
//!
//! Records expose named properties as JSON values. Whether a value can take
//! part in an ordering comparison is decided once, by tagging it as a
//! [`Comparable`], instead of being attempted and caught later.

use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

/// Named property lookup on a record or a nested value
pub trait PropertyAccess {
    /// Returns the named property, or `None` if there is no such property
    fn property(&self, name: &str) -> Option<&Value>;
}

impl PropertyAccess for Value {
    fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            _ => None,
        }
    }
}

impl PropertyAccess for Map<String, Value> {
    fn property(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Anything a query can select
pub trait Record: PropertyAccess + Clone + PartialEq {}

impl<T: PropertyAccess + Clone + PartialEq> Record for T {}

/// A value known to support a total ordering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparable<'a> {
    Bool(bool),
    Number(&'a Number),
    Text(&'a str),
}

impl<'a> Comparable<'a> {
    /// Tags a value as comparable. Null, arrays and objects are not.
    pub fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Comparable::Bool(*b)),
            Value::Number(n) => Some(Comparable::Number(n)),
            Value::String(s) => Some(Comparable::Text(s)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Rank of the value kind: bool < number < string
    pub fn kind_rank(&self) -> u8 {
        match self {
            Comparable::Bool(_) => 0,
            Comparable::Number(_) => 1,
            Comparable::Text(_) => 2,
        }
    }

    /// Compares two values of the same kind; `None` when kinds differ
    pub fn try_cmp(&self, other: &Comparable<'_>) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Bool(a), Comparable::Bool(b)) => Some(a.cmp(b)),
            (Comparable::Number(a), Comparable::Number(b)) => Some(compare_numbers(a, b)),
            (Comparable::Text(a), Comparable::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total order across kinds, falling back to kind rank
    pub fn total_cmp(&self, other: &Comparable<'_>) -> Ordering {
        self.try_cmp(other)
            .unwrap_or_else(|| self.kind_rank().cmp(&other.kind_rank()))
    }
}

/// Numeric comparison without losing integer precision
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
        return ai.cmp(&bi);
    }
    if let (Some(au), Some(bu)) = (a.as_u64(), b.as_u64()) {
        return au.cmp(&bu);
    }
    let af = a.as_f64().unwrap_or(0.0);
    let bf = b.as_f64().unwrap_or(0.0);
    af.total_cmp(&bf)
}

/// Value equality with numbers compared by magnitude (`10 == 10.0`)
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y) == Ordering::Equal,
        _ => a == b,
    }
}

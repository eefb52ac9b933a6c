//! Runtime call context for a query

use serde_json::Value;

use super::order::Sort;
use super::page::Page;

/// One runtime argument of a repository call
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A plain value bound into filter parameters
    Value(Value),
    /// A page request
    Page(Page),
    /// A dynamic sort
    Sort(Sort),
}

impl Argument {
    pub fn kind(&self) -> &'static str {
        match self {
            Argument::Value(_) => "value",
            Argument::Page(_) => "page",
            Argument::Sort(_) => "sort",
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Argument::Value(v) => Some(v),
            _ => None,
        }
    }

    /// True for a `null` value argument
    pub fn is_null(&self) -> bool {
        matches!(self, Argument::Value(Value::Null))
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl From<Page> for Argument {
    fn from(page: Page) -> Self {
        Argument::Page(page)
    }
}

impl From<Sort> for Argument {
    fn from(sort: Sort) -> Self {
        Argument::Sort(sort)
    }
}

/// A single call: the declared method plus its argument values
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    method: String,
    arguments: Vec<Argument>,
}

impl Invocation {
    pub fn new(method: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call without arguments
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Vec::new())
    }

    /// Builds an invocation from plain values
    pub fn with_values(method: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        Self::new(method, values.into_iter().map(Argument::Value).collect())
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn argument(&self, index: usize) -> Option<&Argument> {
        self.arguments.get(index)
    }
}

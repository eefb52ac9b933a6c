//! Operators and the matcher capability

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::{QueryError, QueryResult};
use crate::query::Parameter;

/// Decides whether a resolved property value satisfies a parameter
pub trait Matcher: Send + Sync {
    /// `arguments` holds exactly as many values as the operator's arity
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool>;
}

/// A named predicate family with a fixed arity
#[derive(Clone)]
pub struct Operator {
    name: String,
    operands: usize,
    tokens: Vec<String>,
    matcher: Arc<dyn Matcher>,
}

impl Operator {
    pub fn new(
        name: impl Into<String>,
        operands: usize,
        tokens: &[&str],
        matcher: impl Matcher + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            operands,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            matcher: Arc::new(matcher),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bound arguments the operator consumes
    pub fn operands(&self) -> usize {
        self.operands
    }

    /// Method-name suffixes that select this operator
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub(crate) fn add_token(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Runs the matcher after checking the bound argument count
    pub fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        if arguments.len() != self.operands {
            return Err(QueryError::ArityMismatch {
                path: parameter.path().to_string(),
                operator: self.name.clone(),
                expected: self.operands,
                actual: arguments.len(),
            });
        }
        self.matcher.matches(parameter, value, arguments)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name)
            .field("operands", &self.operands)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

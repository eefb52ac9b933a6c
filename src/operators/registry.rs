//! Operator registry
//!
//! Maps method-name suffixes to operators. Lookup is exact and
//! case-sensitive. The built-in registry is created once per process and
//! shared; custom registries are built from configuration.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::config::EngineConfig;
use crate::errors::{QueryError, QueryResult};

use super::comparable::{
    Between, Comparing, GreaterThan, GreaterThanEqual, LessThan, LessThanEqual, NotBetween,
};
use super::matchers::{
    Containing, EndingWith, IsBoolean, IsEmpty, IsEqualTo, IsIn, IsLike, IsNotEmpty, IsNotEqualTo,
    IsNotIn, IsNotLike, IsNotNull, IsNull, MatchingRegex, NotContaining, StartingWith,
};
use super::operator::Operator;

/// The built-in operator set, in registration order
fn builtin_operators() -> Vec<Operator> {
    vec![
        Operator::new("Is", 1, &["Is", "Equals"], IsEqualTo),
        Operator::new("IsNot", 1, &["IsNot", "Not"], IsNotEqualTo),
        Operator::new(
            "GreaterThan",
            1,
            &["IsGreaterThan", "GreaterThan", "IsAfter", "After"],
            Comparing(GreaterThan),
        ),
        Operator::new(
            "GreaterThanEqual",
            1,
            &["IsGreaterThanEqual", "GreaterThanEqual"],
            Comparing(GreaterThanEqual),
        ),
        Operator::new(
            "LessThan",
            1,
            &["IsLessThan", "LessThan", "IsBefore", "Before"],
            Comparing(LessThan),
        ),
        Operator::new(
            "LessThanEqual",
            1,
            &["IsLessThanEqual", "LessThanEqual"],
            Comparing(LessThanEqual),
        ),
        Operator::new("Between", 2, &["IsBetween", "Between"], Comparing(Between)),
        Operator::new("NotBetween", 2, &["IsNotBetween", "NotBetween"], Comparing(NotBetween)),
        Operator::new("In", 1, &["IsIn", "In"], IsIn),
        Operator::new("NotIn", 1, &["IsNotIn", "NotIn"], IsNotIn),
        Operator::new(
            "Contains",
            1,
            &["IsContaining", "Containing", "Contains"],
            Containing,
        ),
        Operator::new(
            "NotContaining",
            1,
            &["IsNotContaining", "NotContaining", "NotContains"],
            NotContaining,
        ),
        Operator::new(
            "StartsWith",
            1,
            &["IsStartingWith", "StartingWith", "StartsWith"],
            StartingWith,
        ),
        Operator::new(
            "EndsWith",
            1,
            &["IsEndingWith", "EndingWith", "EndsWith"],
            EndingWith,
        ),
        Operator::new("Like", 1, &["IsLike", "Like"], IsLike),
        Operator::new("NotLike", 1, &["IsNotLike", "NotLike"], IsNotLike),
        Operator::new("Regex", 1, &["MatchesRegex", "Matches", "Regex"], MatchingRegex),
        Operator::new("IsNull", 0, &["IsNull", "Null"], IsNull),
        Operator::new("IsNotNull", 0, &["IsNotNull", "NotNull"], IsNotNull),
        Operator::new("True", 0, &["IsTrue", "True"], IsBoolean(true)),
        Operator::new("False", 0, &["IsFalse", "False"], IsBoolean(false)),
        Operator::new("Empty", 0, &["IsEmpty", "Empty"], IsEmpty),
        Operator::new("NotEmpty", 0, &["IsNotEmpty", "NotEmpty"], IsNotEmpty),
    ]
}

/// Registry of operators keyed by suffix token
#[derive(Debug, Clone, Default)]
pub struct OperatorContext {
    operators: Vec<Arc<Operator>>,
    by_token: HashMap<String, Arc<Operator>>,
}

impl OperatorContext {
    /// Creates a registry with no operators
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in operators
    pub fn with_builtins() -> Self {
        let mut context = Self::empty();
        for operator in builtin_operators() {
            context.insert(operator);
        }
        context
    }

    /// The process-wide built-in registry, created on first use
    pub fn shared() -> &'static OperatorContext {
        static SHARED: OnceLock<OperatorContext> = OnceLock::new();
        SHARED.get_or_init(Self::with_builtins)
    }

    /// Built-in registry extended with the configured aliases
    pub fn from_config(config: &EngineConfig) -> QueryResult<Self> {
        let mut context = Self::with_builtins();
        for (token, target) in &config.operator_aliases {
            context.alias(token, target)?;
        }
        Ok(context)
    }

    fn insert(&mut self, operator: Operator) -> Arc<Operator> {
        let operator = Arc::new(operator);
        for token in operator.tokens() {
            self.by_token.insert(token.clone(), Arc::clone(&operator));
        }
        self.operators.push(Arc::clone(&operator));
        operator
    }

    /// Registers a custom operator. Fails if any of its tokens is taken.
    pub fn register(&mut self, operator: Operator) -> QueryResult<Arc<Operator>> {
        if let Some(token) = operator
            .tokens()
            .iter()
            .find(|token| self.by_token.contains_key(token.as_str()))
        {
            return Err(QueryError::OperatorConflict {
                token: token.clone(),
            });
        }
        Ok(self.insert(operator))
    }

    /// Adds `token` as another suffix for the operator named `target`
    pub fn alias(&mut self, token: &str, target: &str) -> QueryResult<()> {
        if self.by_token.contains_key(token) {
            return Err(QueryError::OperatorConflict {
                token: token.to_string(),
            });
        }
        let position = self
            .operators
            .iter()
            .position(|operator| operator.name() == target)
            .ok_or_else(|| QueryError::OperatorLookup {
                suffix: target.to_string(),
            })?;

        let mut operator = Operator::clone(&self.operators[position]);
        operator.add_token(token);
        let operator = Arc::new(operator);

        for existing in operator.tokens() {
            self.by_token.insert(existing.clone(), Arc::clone(&operator));
        }
        self.operators[position] = operator;
        Ok(())
    }

    /// Looks up an operator by method-name suffix
    pub fn by_suffix(&self, suffix: &str) -> QueryResult<Arc<Operator>> {
        self.by_token
            .get(suffix)
            .cloned()
            .ok_or_else(|| QueryError::OperatorLookup {
                suffix: suffix.to_string(),
            })
    }

    /// Looks up an operator by its canonical name
    pub fn by_name(&self, name: &str) -> Option<Arc<Operator>> {
        self.operators
            .iter()
            .find(|operator| operator.name() == name)
            .cloned()
    }

    /// Operators in registration order
    pub fn operators(&self) -> impl Iterator<Item = &Arc<Operator>> {
        self.operators.iter()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

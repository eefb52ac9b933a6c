//! Branch filtering for query execution
//!
//! A record is kept iff at least one branch matches it, and a branch matches
//! iff every parameter in it matches (AND inside, OR across). No branches
//! means every record is kept. Errors are never swallowed: a record that
//! cannot be evaluated aborts the query.

use crate::errors::{QueryError, QueryResult};
use crate::query::{Branch, Invocation, Parameter, PropertyAccess, Record};

use super::binding::bind;
use super::resolver::PropertyResolver;

/// Evaluates descriptor branches against records
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateFilter {
    resolver: PropertyResolver,
}

impl PredicateFilter {
    pub fn new(resolver: PropertyResolver) -> Self {
        Self { resolver }
    }

    /// Keeps matching records, in their incoming order
    pub fn filter<R: Record>(
        &self,
        records: Vec<R>,
        branches: &[Branch],
        invocation: &Invocation,
    ) -> QueryResult<Vec<R>> {
        if branches.is_empty() {
            return Ok(records);
        }

        let mut matched = Vec::with_capacity(records.len());
        for record in records {
            if self.matches(&record, branches, invocation)? {
                matched.push(record);
            }
        }
        Ok(matched)
    }

    /// Checks if a record satisfies any branch
    pub fn matches<R: PropertyAccess + ?Sized>(
        &self,
        record: &R,
        branches: &[Branch],
        invocation: &Invocation,
    ) -> QueryResult<bool> {
        if branches.is_empty() {
            return Ok(true);
        }
        for branch in branches {
            if self.matches_branch(record, branch, invocation)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Checks if a record satisfies every parameter of a branch
    fn matches_branch<R: PropertyAccess + ?Sized>(
        &self,
        record: &R,
        branch: &[Parameter],
        invocation: &Invocation,
    ) -> QueryResult<bool> {
        for parameter in branch {
            if !self.matches_parameter(record, parameter, invocation)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn matches_parameter<R: PropertyAccess + ?Sized>(
        &self,
        record: &R,
        parameter: &Parameter,
        invocation: &Invocation,
    ) -> QueryResult<bool> {
        let operator = parameter.operator();
        if parameter.indices().len() != operator.operands() {
            return Err(QueryError::ArityMismatch {
                path: parameter.path().to_string(),
                operator: operator.name().to_string(),
                expected: operator.operands(),
                actual: parameter.indices().len(),
            });
        }

        let value = self.resolver.resolve(record, parameter.path())?;
        let arguments = bind(parameter, invocation)?;
        operator.matches(parameter, value, &arguments)
    }
}

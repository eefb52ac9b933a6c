//! Ordering comparisons
//!
//! Every operand of an ordering comparison (the resolved value and each bound
//! argument) must be tagged [`Comparable`] before the concrete comparison
//! runs. Any failure reports the parameter's property path, whichever
//! operand was at fault.

use std::cmp::Ordering;

use serde_json::Value;

use crate::errors::{QueryError, QueryResult};
use crate::query::{Comparable, Parameter};

use super::operator::Matcher;

/// A comparison over operands already known to be comparable and of one kind
pub trait ComparableMatcher: Send + Sync {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool;
}

/// Adapts a [`ComparableMatcher`] into a [`Matcher`] by validating operands
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparing<M>(pub M);

impl<M: ComparableMatcher> Matcher for Comparing<M> {
    fn matches(&self, parameter: &Parameter, value: &Value, arguments: &[&Value]) -> QueryResult<bool> {
        let not_comparable = || QueryError::not_comparable(parameter.path());

        let value = Comparable::of(value).ok_or_else(not_comparable)?;
        let bounds = arguments
            .iter()
            .map(|argument| Comparable::of(argument).ok_or_else(not_comparable))
            .collect::<QueryResult<Vec<_>>>()?;

        if bounds.iter().any(|bound| value.try_cmp(bound).is_none()) {
            return Err(not_comparable());
        }

        Ok(self.0.compare(value, &bounds))
    }
}

fn against(value: Comparable<'_>, bounds: &[Comparable<'_>], accept: fn(Ordering) -> bool) -> bool {
    bounds
        .first()
        .is_some_and(|bound| accept(value.total_cmp(bound)))
}

fn within(value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
    match bounds {
        [low, high] => value.total_cmp(low) != Ordering::Less && value.total_cmp(high) != Ordering::Greater,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreaterThan;

impl ComparableMatcher for GreaterThan {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        against(value, bounds, |o| o == Ordering::Greater)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreaterThanEqual;

impl ComparableMatcher for GreaterThanEqual {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        against(value, bounds, |o| o != Ordering::Less)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LessThan;

impl ComparableMatcher for LessThan {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        against(value, bounds, |o| o == Ordering::Less)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LessThanEqual;

impl ComparableMatcher for LessThanEqual {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        against(value, bounds, |o| o != Ordering::Greater)
    }
}

/// Inclusive on both ends
#[derive(Debug, Clone, Copy, Default)]
pub struct Between;

impl ComparableMatcher for Between {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        within(value, bounds)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotBetween;

impl ComparableMatcher for NotBetween {
    fn compare(&self, value: Comparable<'_>, bounds: &[Comparable<'_>]) -> bool {
        bounds.len() == 2 && !within(value, bounds)
    }
}

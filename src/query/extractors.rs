//! Page and sort extraction from an invocation
//!
//! A descriptor does not hold paging or sorting values itself. It holds
//! extractors that pull them from each call, either from an argument
//! position or from a sort fixed when the descriptor was derived.

use std::fmt;

use crate::errors::{QueryError, QueryResult};

use super::invocation::{Argument, Invocation};
use super::order::Sort;
use super::page::Page;

/// Derives the page window for one call
pub trait PageExtractor: fmt::Debug + fmt::Display + Send + Sync {
    /// `None` means the call is not paged
    fn extract(&self, invocation: &Invocation) -> QueryResult<Option<Page>>;
}

/// Derives the sort for one call
pub trait SortExtractor: fmt::Debug + fmt::Display + Send + Sync {
    /// `None` means the call is not sorted
    fn extract(&self, invocation: &Invocation) -> QueryResult<Option<Sort>>;
}

fn argument<'a>(invocation: &'a Invocation, index: usize) -> QueryResult<&'a Argument> {
    invocation
        .argument(index)
        .ok_or_else(|| QueryError::ArgumentIndex {
            method: invocation.method().to_string(),
            index,
            len: invocation.arguments().len(),
        })
}

fn wrong_kind(index: usize, expected: &'static str) -> QueryError {
    QueryError::invalid_argument(format!("#{}", index), expected)
}

/// Reads a page request from the argument at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageableExtractor {
    index: usize,
}

impl PageableExtractor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl PageExtractor for PageableExtractor {
    fn extract(&self, invocation: &Invocation) -> QueryResult<Option<Page>> {
        match argument(invocation, self.index)? {
            Argument::Page(page) => Ok(Some(page.clone())),
            arg if arg.is_null() => Ok(None),
            _ => Err(wrong_kind(self.index, "a page request")),
        }
    }
}

impl fmt::Display for PageableExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A sort fixed at derivation time, e.g. `OrderByLastNameAsc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedSortExtractor {
    sort: Sort,
}

impl WrappedSortExtractor {
    pub fn new(sort: Sort) -> Self {
        Self { sort }
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

impl SortExtractor for WrappedSortExtractor {
    fn extract(&self, _invocation: &Invocation) -> QueryResult<Option<Sort>> {
        Ok(Some(self.sort.clone()))
    }
}

impl fmt::Display for WrappedSortExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sort)
    }
}

/// Reads a sort from the argument at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortArgumentExtractor {
    index: usize,
}

impl SortArgumentExtractor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl SortExtractor for SortArgumentExtractor {
    fn extract(&self, invocation: &Invocation) -> QueryResult<Option<Sort>> {
        match argument(invocation, self.index)? {
            Argument::Sort(sort) => Ok(Some(sort.clone())),
            arg if arg.is_null() => Ok(None),
            _ => Err(wrong_kind(self.index, "a sort")),
        }
    }
}

impl fmt::Display for SortArgumentExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Reads the sort carried by a page request at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageableSortExtractor {
    index: usize,
}

impl PageableSortExtractor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl SortExtractor for PageableSortExtractor {
    fn extract(&self, invocation: &Invocation) -> QueryResult<Option<Sort>> {
        match argument(invocation, self.index)? {
            Argument::Page(page) => Ok(page.sort.clone()),
            arg if arg.is_null() => Ok(None),
            _ => Err(wrong_kind(self.index, "a page request")),
        }
    }
}

impl fmt::Display for PageableSortExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Order;
    use serde_json::json;

    #[test]
    fn test_pageable_extractor() {
        let extractor = PageableExtractor::new(1);
        let invocation = Invocation::new(
            "findByName",
            vec![json!("Milad").into(), Page::new(1, 3).into()],
        );
        assert_eq!(extractor.extract(&invocation), Ok(Some(Page::new(1, 3))));

        let invocation = Invocation::with_values("findByName", [json!("Milad"), json!(null)]);
        assert_eq!(extractor.extract(&invocation), Ok(None));

        let invocation = Invocation::with_values("findByName", [json!("Milad"), json!(5)]);
        assert_eq!(
            extractor.extract(&invocation).unwrap_err().code(),
            "QUERY_INVALID_ARGUMENT"
        );
    }

    #[test]
    fn test_missing_argument() {
        let extractor = PageableExtractor::new(0);
        let err = extractor.extract(&Invocation::bare("findAll")).unwrap_err();
        assert_eq!(
            err,
            QueryError::ArgumentIndex {
                method: "findAll".into(),
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn test_sort_extractors() {
        let sort = Sort::by(Order::desc("age"));

        let wrapped = WrappedSortExtractor::new(sort.clone());
        assert_eq!(wrapped.sort(), &sort);
        assert_eq!(wrapped.to_string(), "age desc");
        assert_eq!(wrapped.extract(&Invocation::bare("findAll")), Ok(Some(sort.clone())));

        let from_argument = SortArgumentExtractor::new(0);
        let invocation = Invocation::new("findAll", vec![sort.clone().into()]);
        assert_eq!(from_argument.extract(&invocation), Ok(Some(sort.clone())));

        let from_page = PageableSortExtractor::new(0);
        let invocation = Invocation::new(
            "findAll",
            vec![Page::new(0, 5).with_sort(sort.clone()).into()],
        );
        assert_eq!(from_page.extract(&invocation), Ok(Some(sort)));

        let invocation = Invocation::new("findAll", vec![Page::new(0, 5).into()]);
        assert_eq!(from_page.extract(&invocation), Ok(None));
    }
}

//! Result sorting for query execution
//!
//! Sorts by an ordered list of keys, deterministically. The first order is
//! primary and later orders only break ties. The sort is stable, so records
//! that tie on every key keep their incoming order.

use std::cmp::Ordering;

use serde_json::Value;

use crate::errors::{QueryError, QueryResult};
use crate::query::{Comparable, NullHandling, Order, Record, Sort, SortDirection};

use super::resolver::PropertyResolver;

/// A resolved sort key; `None` is null
type Key<'r> = Option<Comparable<'r>>;

/// Sorts result records
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultSorter {
    resolver: PropertyResolver,
}

impl ResultSorter {
    pub fn new(resolver: PropertyResolver) -> Self {
        Self { resolver }
    }

    /// Sorts records in place according to `sort`.
    ///
    /// Keys are resolved up front for every record, so a non-comparable key
    /// fails the call before anything is reordered, however many records
    /// there are.
    pub fn sort<R: Record>(&self, records: &mut Vec<R>, sort: &Sort) -> QueryResult<()> {
        if sort.is_unsorted() {
            return Ok(());
        }

        let permutation = {
            let keys = records
                .iter()
                .map(|record| self.keys(record, &sort.orders))
                .collect::<QueryResult<Vec<_>>>()?;
            if keys.len() < 2 {
                return Ok(());
            }

            let mut permutation: Vec<usize> = (0..records.len()).collect();
            permutation.sort_by(|&a, &b| Self::compare_keys(&keys[a], &keys[b], &sort.orders));
            permutation
        };

        let mut slots: Vec<Option<R>> = std::mem::take(records).into_iter().map(Some).collect();
        *records = permutation
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect();
        Ok(())
    }

    fn keys<'r, R: Record>(&self, record: &'r R, orders: &[Order]) -> QueryResult<Vec<Key<'r>>> {
        orders
            .iter()
            .map(|order| {
                let value = self.resolver.resolve(record, &order.property)?;
                match value {
                    Value::Null => Ok(None),
                    value => Comparable::of(value)
                        .map(Some)
                        .ok_or_else(|| QueryError::not_comparable(&order.property)),
                }
            })
            .collect()
    }

    fn compare_keys(a: &[Key<'_>], b: &[Key<'_>], orders: &[Order]) -> Ordering {
        a.iter()
            .zip(b)
            .zip(orders)
            .map(|((a, b), order)| Self::compare_key(a, b, order))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Compares two keys under one order.
    ///
    /// Ordering rules:
    /// - bool < number < string, natural ordering within a kind
    /// - `Default` nulls are the lowest value and follow the direction
    /// - `NullsFirst`/`NullsLast` ignore the direction
    fn compare_key(a: &Key<'_>, b: &Key<'_>, order: &Order) -> Ordering {
        let null_first = match order.null_handling {
            NullHandling::NullsFirst => Ordering::Less,
            NullHandling::NullsLast => Ordering::Greater,
            NullHandling::Default => Self::directed(Ordering::Less, order.direction),
        };

        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => null_first,
            (Some(_), None) => null_first.reverse(),
            (Some(a), Some(b)) => Self::directed(a.total_cmp(b), order.direction),
        }
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

//! Paging and limiting

use crate::errors::{QueryError, QueryResult};
use crate::query::Page;

/// Cuts the page window out of `records`.
///
/// A window starting past the end is empty, not an error.
pub fn page<R>(records: Vec<R>, page: Option<&Page>) -> QueryResult<Vec<R>> {
    let Some(page) = page else {
        return Ok(records);
    };
    if page.size == 0 {
        return Err(QueryError::invalid_page("page size must be at least 1"));
    }
    Ok(records
        .into_iter()
        .skip(page.offset())
        .take(page.size)
        .collect())
}

/// Keeps at most `limit` records; 0 means unlimited
pub fn limit<R>(mut records: Vec<R>, limit: usize) -> Vec<R> {
    if limit > 0 {
        records.truncate(limit);
    }
    records
}

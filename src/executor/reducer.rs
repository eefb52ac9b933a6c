//! Distinct reduction
//!
//! Keeps the first occurrence of each record, in current order. Records are
//! compared whole unless a unique property is given, in which case records
//! sharing that property's value are duplicates.

use serde_json::Value;

use crate::errors::QueryResult;
use crate::query::{values_equal, Record};

use super::resolver::PropertyResolver;

/// Removes duplicate records
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctReducer {
    resolver: PropertyResolver,
}

impl DistinctReducer {
    pub fn new(resolver: PropertyResolver) -> Self {
        Self { resolver }
    }

    /// No-op unless `distinct` is set
    pub fn reduce<R: Record>(
        &self,
        records: Vec<R>,
        distinct: bool,
        unique_property: Option<&str>,
    ) -> QueryResult<Vec<R>> {
        if !distinct {
            return Ok(records);
        }
        match unique_property {
            None => Ok(Self::by_record(records)),
            Some(path) => self.by_property(records, path),
        }
    }

    fn by_record<R: Record>(records: Vec<R>) -> Vec<R> {
        let mut kept: Vec<R> = Vec::with_capacity(records.len());
        for record in records {
            if !kept.contains(&record) {
                kept.push(record);
            }
        }
        kept
    }

    fn by_property<R: Record>(&self, records: Vec<R>, path: &str) -> QueryResult<Vec<R>> {
        let mut seen: Vec<Value> = Vec::new();
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            let value = self.resolver.resolve(&record, path)?;
            if seen.iter().any(|existing| values_equal(existing, value)) {
                continue;
            }
            seen.push(value.clone());
            kept.push(record);
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Value> {
        vec![
            json!({"id": "k1", "city": "Tehran"}),
            json!({"id": "k2", "city": "Seattle"}),
            json!({"id": "k1", "city": "Tehran"}),
            json!({"id": "k3", "city": "Seattle"}),
        ]
    }

    #[test]
    fn test_not_distinct_is_noop() {
        let result = DistinctReducer::default().reduce(records(), false, Some("city")).unwrap();
        assert_eq!(result, records());
    }

    #[test]
    fn test_whole_record_equality() {
        let result = DistinctReducer::default().reduce(records(), true, None).unwrap();
        assert_eq!(
            result,
            vec![
                json!({"id": "k1", "city": "Tehran"}),
                json!({"id": "k2", "city": "Seattle"}),
                json!({"id": "k3", "city": "Seattle"}),
            ]
        );
    }

    #[test]
    fn test_unique_property_keeps_first() {
        let result = DistinctReducer::default().reduce(records(), true, Some("city")).unwrap();
        assert_eq!(
            result,
            vec![
                json!({"id": "k1", "city": "Tehran"}),
                json!({"id": "k2", "city": "Seattle"}),
            ]
        );
    }

    #[test]
    fn test_unique_property_must_resolve() {
        let err = DistinctReducer::default()
            .reduce(records(), true, Some("zip"))
            .unwrap_err();
        assert_eq!(err.path(), Some("zip"));
    }
}

//! Dotted-path property resolution
//!
//! `address.city` reads `address` from the record, then `city` from the
//! nested value. Resolution has no side effects and caches nothing.

use serde_json::Value;

use crate::config::MissingPropertyPolicy;
use crate::errors::{QueryError, QueryResult};
use crate::query::PropertyAccess;

static NULL: Value = Value::Null;

/// Resolves property paths against records
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyResolver {
    missing: MissingPropertyPolicy,
}

impl PropertyResolver {
    pub fn new(missing: MissingPropertyPolicy) -> Self {
        Self { missing }
    }

    /// Resolves `path` on `record`.
    ///
    /// A final `null` resolves to `null`. A `null` or a non-object before the
    /// last segment is always an error; a missing segment is an error unless
    /// the policy maps it to `null`.
    pub fn resolve<'r, R: PropertyAccess + ?Sized>(
        &self,
        record: &'r R,
        path: &str,
    ) -> QueryResult<&'r Value> {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();

        let mut current = match record.property(head) {
            Some(value) => value,
            None => return self.missing(path, head),
        };

        for segment in segments {
            current = match current {
                Value::Null => {
                    return Err(QueryError::unresolvable(
                        path,
                        format!("null value before segment `{}`", segment),
                    ))
                }
                Value::Object(_) => match current.property(segment) {
                    Some(value) => value,
                    None => return self.missing(path, segment),
                },
                _ => {
                    return Err(QueryError::unresolvable(
                        path,
                        format!("cannot read `{}` from a non-object value", segment),
                    ))
                }
            };
        }

        Ok(current)
    }

    fn missing<'r>(&self, path: &str, segment: &str) -> QueryResult<&'r Value> {
        match self.missing {
            MissingPropertyPolicy::Null => Ok(&NULL),
            MissingPropertyPolicy::Fail => Err(QueryError::unresolvable(
                path,
                format!("no property `{}`", segment),
            )),
        }
    }
}

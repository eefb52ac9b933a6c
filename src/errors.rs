//! Query error types
//!
//! Error codes:
//! - QUERY_PROPERTY_RESOLUTION
//! - QUERY_ARGUMENT_TYPE
//! - QUERY_OPERATOR_LOOKUP
//! - QUERY_ARITY_MISMATCH
//! - QUERY_INVALID_ARGUMENT
//! - QUERY_ARGUMENT_INDEX
//! - QUERY_INVALID_PAGE
//! - QUERY_INVALID_PATTERN
//! - QUERY_OPERATOR_CONFLICT
//!
//! Every error aborts the whole query. A record that cannot be evaluated is
//! never silently dropped from the result.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while evaluating a query descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    // ==================
    // Resolution Errors
    // ==================

    /// A dotted path could not be navigated on a record
    #[error("Cannot resolve property `{path}`: {reason}")]
    PropertyResolution { path: String, reason: String },

    // ==================
    // Argument Errors
    // ==================

    /// An operand of an ordering comparison is not ordering-capable.
    ///
    /// Always names the parameter's property, never the offending value.
    #[error("Expected comparable operands for property `{path}`")]
    ArgumentType { path: String },

    /// An operand has the wrong shape for its matcher
    #[error("Invalid argument for property `{path}`: expected {expected}")]
    InvalidArgument { path: String, expected: &'static str },

    /// A parameter points past the end of the invocation arguments
    #[error("Argument index {index} is out of bounds for `{method}` with {len} argument(s)")]
    ArgumentIndex {
        method: String,
        index: usize,
        len: usize,
    },

    /// A pattern argument failed to compile
    #[error("Invalid pattern for property `{path}`: {reason}")]
    InvalidPattern { path: String, reason: String },

    /// A page request cannot be applied
    #[error("Invalid page request: {reason}")]
    InvalidPage { reason: String },

    // ==================
    // Operator Errors
    // ==================

    /// No operator is registered under the requested suffix
    #[error("No operator registered for suffix `{suffix}`")]
    OperatorLookup { suffix: String },

    /// The number of bound arguments does not match the operator's arity
    #[error("Operator {operator} on `{path}` expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        path: String,
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// A token is already claimed by another operator
    #[error("Operator token `{token}` is already registered")]
    OperatorConflict { token: String },
}

impl QueryError {
    /// Create a property resolution error
    pub fn unresolvable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PropertyResolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an argument type error for the given property
    pub fn not_comparable(path: impl Into<String>) -> Self {
        Self::ArgumentType { path: path.into() }
    }

    /// Create an invalid argument error for the given property
    pub fn invalid_argument(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidArgument {
            path: path.into(),
            expected,
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(reason: impl Into<String>) -> Self {
        Self::InvalidPage {
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::PropertyResolution { .. } => "QUERY_PROPERTY_RESOLUTION",
            QueryError::ArgumentType { .. } => "QUERY_ARGUMENT_TYPE",
            QueryError::InvalidArgument { .. } => "QUERY_INVALID_ARGUMENT",
            QueryError::ArgumentIndex { .. } => "QUERY_ARGUMENT_INDEX",
            QueryError::InvalidPattern { .. } => "QUERY_INVALID_PATTERN",
            QueryError::InvalidPage { .. } => "QUERY_INVALID_PAGE",
            QueryError::OperatorLookup { .. } => "QUERY_OPERATOR_LOOKUP",
            QueryError::ArityMismatch { .. } => "QUERY_ARITY_MISMATCH",
            QueryError::OperatorConflict { .. } => "QUERY_OPERATOR_CONFLICT",
        }
    }

    /// Returns the property path this error is about, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            QueryError::PropertyResolution { path, .. }
            | QueryError::ArgumentType { path }
            | QueryError::InvalidArgument { path, .. }
            | QueryError::InvalidPattern { path, .. }
            | QueryError::ArityMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            QueryError::not_comparable("age").code(),
            "QUERY_ARGUMENT_TYPE"
        );
        assert_eq!(
            QueryError::unresolvable("a.b", "missing").code(),
            "QUERY_PROPERTY_RESOLUTION"
        );
        assert_eq!(
            QueryError::OperatorLookup {
                suffix: "Near".into()
            }
            .code(),
            "QUERY_OPERATOR_LOOKUP"
        );
    }

    #[test]
    fn test_argument_type_names_path() {
        let err = QueryError::not_comparable("x.y.z");
        assert!(err.to_string().contains("x.y.z"));
        assert_eq!(err.path(), Some("x.y.z"));
    }

    #[test]
    fn test_page_error_has_no_path() {
        let err = QueryError::invalid_page("page size must be positive");
        assert_eq!(err.path(), None);
        assert!(err.to_string().contains("page size"));
    }
}

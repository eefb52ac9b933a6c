//! Parameter binding
//!
//! Pulls the raw argument values a parameter consumes out of the
//! invocation, in the parameter's index order. No coercion.

use serde_json::Value;

use crate::errors::{QueryError, QueryResult};
use crate::query::{Argument, Invocation, Parameter};

/// Binds the invocation arguments at the parameter's indices
pub fn bind<'i>(parameter: &Parameter, invocation: &'i Invocation) -> QueryResult<Vec<&'i Value>> {
    parameter
        .indices()
        .iter()
        .map(|&index| match invocation.argument(index) {
            Some(Argument::Value(value)) => Ok(value),
            Some(_) => Err(QueryError::invalid_argument(parameter.path(), "a plain value")),
            None => Err(QueryError::ArgumentIndex {
                method: invocation.method().to_string(),
                index,
                len: invocation.arguments().len(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::OperatorContext;
    use crate::query::Page;
    use serde_json::json;

    fn between(indices: Vec<usize>) -> Parameter {
        Parameter::plain(
            "age",
            indices,
            OperatorContext::shared().by_suffix("Between").unwrap(),
        )
    }

    #[test]
    fn test_binds_in_index_order() {
        let invocation = Invocation::with_values("findByAgeBetween", [json!(1), json!(2), json!(3)]);
        let bound = bind(&between(vec![2, 0]), &invocation).unwrap();
        assert_eq!(bound, vec![&json!(3), &json!(1)]);
    }

    #[test]
    fn test_out_of_range_index() {
        let invocation = Invocation::with_values("findByAgeBetween", [json!(1)]);
        let err = bind(&between(vec![0, 1]), &invocation).unwrap_err();
        assert_eq!(
            err,
            QueryError::ArgumentIndex {
                method: "findByAgeBetween".into(),
                index: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_page_argument_cannot_bind() {
        let invocation = Invocation::new("findByAge", vec![Page::new(0, 1).into()]);
        let err = bind(&between(vec![0]), &invocation).unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_ARGUMENT");
    }
}

//! Operators and matchers
//!
//! An operator is a named predicate family (Is, GreaterThan, Between, ...)
//! with a fixed arity. Its matcher decides whether one record's resolved
//! property value satisfies a parameter given the bound arguments.
//!
//! Ordering comparisons go through [`Comparing`], which checks that every
//! operand is ordering-capable before the comparison runs.

mod comparable;
mod matchers;
mod operator;
mod registry;

pub use comparable::{
    Between, ComparableMatcher, Comparing, GreaterThan, GreaterThanEqual, LessThan, LessThanEqual,
    NotBetween,
};
pub use matchers::{
    Containing, EndingWith, IsBoolean, IsEmpty, IsEqualTo, IsIn, IsLike, IsNotEmpty, IsNotEqualTo,
    IsNotIn, IsNotLike, IsNotNull, IsNull, MatchingRegex, NotContaining, StartingWith,
};
pub use operator::{Matcher, Operator};
pub use registry::OperatorContext;

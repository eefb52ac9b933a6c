//! Query model
//!
//! Descriptors, parameters, invocations, sorts and pages. These are plain
//! immutable values; evaluation lives in the executor.

mod descriptor;
mod extractors;
mod invocation;
mod order;
mod page;
mod parameter;
mod value;

pub use descriptor::{Branch, QueryDescriptor};
pub use extractors::{
    PageExtractor, PageableExtractor, PageableSortExtractor, SortArgumentExtractor, SortExtractor,
    WrappedSortExtractor,
};
pub use invocation::{Argument, Invocation};
pub use order::{NullHandling, Order, Sort, SortDirection};
pub use page::Page;
pub use parameter::{Modifier, Parameter};
pub use value::{compare_numbers, values_equal, Comparable, PropertyAccess, Record};

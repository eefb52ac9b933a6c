//! Query executor subsystem
//!
//! Consumes query descriptors and produces deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Snapshot every record from the store, in store order
//! 2. Filter records by the descriptor branches (OR of AND-groups)
//! 3. Drop duplicates (if distinct)
//! 4. Apply sort (if specified)
//! 5. Apply paging (if specified)
//! 6. Apply limit
//! 7. Return ordered results
//!
//! # Invariants
//!
//! - Deterministic: same descriptor + invocation + store = same results
//! - The store is never written
//! - Fail loudly: a record that cannot be evaluated aborts the query

mod binding;
mod filters;
mod paging;
mod reducer;
mod resolver;
mod select;
mod sorter;

pub use binding::bind;
pub use filters::PredicateFilter;
pub use paging::{limit, page};
pub use reducer::DistinctReducer;
pub use resolver::PropertyResolver;
pub use select::SelectOperation;
pub use sorter::ResultSorter;

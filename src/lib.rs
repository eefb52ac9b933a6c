//! repoquery - deterministic in-memory execution of derived repository queries
//!
//! A [`query::QueryDescriptor`] describes what a repository method selects:
//! filter branches, sort, paging, limit and distinctness. A
//! [`executor::SelectOperation`] runs it against a [`store::DataStore`]
//! snapshot for one [`query::Invocation`].

pub mod config;
pub mod errors;
pub mod executor;
pub mod operators;
pub mod query;
pub mod store;

pub use config::{ConfigError, EngineConfig, MissingPropertyPolicy};
pub use errors::{QueryError, QueryResult};
pub use executor::SelectOperation;
pub use operators::{Operator, OperatorContext};
pub use query::{Invocation, QueryDescriptor};
pub use store::{DataStore, MemoryStore};

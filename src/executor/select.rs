//! Select operation
//!
//! Executes a query descriptor against a store snapshot.
//!
//! Execution flow (strict order):
//! 1. Take a snapshot of every record, in store order
//! 2. Filter records by the descriptor's branches
//! 3. Drop duplicates (if distinct)
//! 4. Apply sort (if the invocation yields one)
//! 5. Cut the page window (if the invocation yields one)
//! 6. Apply limit
//! 7. Return ordered results

use std::fmt;

use tracing::{debug, debug_span, trace};

use crate::config::EngineConfig;
use crate::errors::QueryResult;
use crate::query::{Invocation, QueryDescriptor, Record};
use crate::store::DataStore;

use super::filters::PredicateFilter;
use super::paging;
use super::reducer::DistinctReducer;
use super::resolver::PropertyResolver;
use super::sorter::ResultSorter;

/// Selects records matching a descriptor
#[derive(Debug, Clone)]
pub struct SelectOperation {
    descriptor: QueryDescriptor,
}

impl SelectOperation {
    pub fn new(descriptor: QueryDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    /// Executes the descriptor for one invocation.
    ///
    /// Reads the store once and never writes to it. Either every stage
    /// succeeds or the first error is returned; there are no partial results.
    pub fn execute<K, R, S>(
        &self,
        store: &S,
        config: &EngineConfig,
        invocation: &Invocation,
    ) -> QueryResult<Vec<R>>
    where
        R: Record,
        S: DataStore<K, R> + ?Sized,
    {
        let span = debug_span!("select", query = %self.descriptor, method = invocation.method());
        let _enter = span.enter();

        self.run(store, config, invocation).map_err(|err| {
            debug!(code = err.code(), error = %err, "select failed");
            err
        })
    }

    fn run<K, R, S>(&self, store: &S, config: &EngineConfig, invocation: &Invocation) -> QueryResult<Vec<R>>
    where
        R: Record,
        S: DataStore<K, R> + ?Sized,
    {
        let resolver = PropertyResolver::new(config.missing_properties);

        // Step 1: Snapshot
        let records = store.retrieve_all();
        let scanned = records.len();

        // Step 2: Filter
        let records =
            PredicateFilter::new(resolver).filter(records, self.descriptor.branches(), invocation)?;
        trace!(scanned, matched = records.len(), "filtered");

        // Step 3: Distinct
        let mut records = DistinctReducer::new(resolver).reduce(
            records,
            self.descriptor.is_distinct(),
            self.descriptor.unique_property(),
        )?;

        // Step 4: Sort
        let sort = match self.descriptor.sort_extractor() {
            Some(extractor) => extractor.extract(invocation)?,
            None => None,
        };
        if let Some(sort) = &sort {
            ResultSorter::new(resolver).sort(&mut records, sort)?;
            trace!(sort = %sort, "sorted");
        }

        // Step 5: Page
        let page = match self.descriptor.page_extractor() {
            Some(extractor) => extractor.extract(invocation)?,
            None => None,
        };
        let records = paging::page(records, page.as_ref())?;

        // Step 6: Limit
        let limit = self.descriptor.limit();
        let records = paging::limit(records, limit);

        // Step 7: Return ordered results
        debug!(scanned, returned = records.len(), limit, "select complete");
        Ok(records)
    }
}

impl fmt::Display for SelectOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

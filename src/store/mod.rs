//! Record stores
//!
//! The executor only reads a store through [`DataStore::retrieve_all`],
//! which must return a consistent snapshot in store order.

mod memory;

pub use memory::MemoryStore;

/// A keyed collection of records
pub trait DataStore<K, R> {
    /// Inserts or overwrites the record under `key`
    fn save(&mut self, key: K, record: R);

    /// Removes and returns the record under `key`
    fn delete(&mut self, key: &K) -> Option<R>;

    /// Returns the record under `key`
    fn retrieve(&self, key: &K) -> Option<&R>;

    /// Snapshot of every record, in store order
    fn retrieve_all(&self) -> Vec<R>;

    /// Keys in store order
    fn keys(&self) -> Vec<K>;

    fn has_key(&self, key: &K) -> bool {
        self.retrieve(key).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

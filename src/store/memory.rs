//! In-memory store keeping first-insertion order

use std::collections::HashMap;
use std::hash::Hash;

use super::DataStore;

/// Keyed records in insertion order. Overwriting a key keeps its position.
#[derive(Debug, Clone)]
pub struct MemoryStore<K, R> {
    order: Vec<K>,
    records: HashMap<K, R>,
}

impl<K, R> Default for MemoryStore<K, R> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, R: Clone> MemoryStore<K, R> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Eq + Hash + Clone, R: Clone> DataStore<K, R> for MemoryStore<K, R> {
    fn save(&mut self, key: K, record: R) {
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    fn delete(&mut self, key: &K) -> Option<R> {
        let removed = self.records.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    fn retrieve(&self, key: &K) -> Option<&R> {
        self.records.get(key)
    }

    fn retrieve_all(&self) -> Vec<R> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key))
            .cloned()
            .collect()
    }

    fn keys(&self) -> Vec<K> {
        self.order.clone()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

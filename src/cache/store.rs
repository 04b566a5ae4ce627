use crate::cache::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// The map behind a [`crate::Cache`].
///
/// Holds no synchronization of its own. Every call is made while the owning cache holds its lock
/// in the matching mode.
#[derive(Debug)]
pub(crate) struct Store<V, S = RandomState> {
    entries: HashMap<String, V, S>,
}

impl<V, S> Store<V, S>
where
    S: BuildHasher,
{
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    pub(crate) fn upsert(&mut self, key: String, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub(crate) fn delete(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn lookup(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Removes every entry, keeping the allocated map.
    pub(crate) fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    pub(crate) fn size(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl<V, S> Store<V, S>
where
    V: Clone,
{
    /// Copies out all values. The returned vector shares nothing with the map.
    pub(crate) fn snapshot(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    pub(crate) fn entries(&self) -> Vec<(String, V)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

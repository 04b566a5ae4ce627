use crate::Stats;
use cachable::Cachable;
use log::{Level, debug, log_enabled, trace};
use parking_lot::{Mutex, RwLock};
use stats::Counters;
use std::hash::BuildHasher;
use std::time::Instant;
use store::Store;

pub(crate) mod cachable;
pub(crate) mod stats;
mod store;

pub(crate) type RandomState = ahash::RandomState;

const DEFAULT_LABEL: &str = "keyed-cache";

/// Thread-safe, in-memory cache mapping string keys to values.
///
/// Any number of readers ([`Cache::count`], [`Cache::get`], [`Cache::all_items`], ...) run in
/// parallel. A mutation ([`Cache::insert`], [`Cache::remove`], [`Cache::reset`], ...) holds the
/// cache exclusively, so readers never see it half applied and concurrent mutations are applied
/// one after another. Waiting writers block newly arriving readers, which keeps writers from being
/// starved under read-heavy load.
///
/// Mutations are synchronous: once a call returns, every read that starts afterwards, on any
/// thread, observes it.
///
/// Wrap the cache in a [`std::sync::Arc`] to share it between threads. All operations only
/// require shared references to the cache.
#[derive(Debug)]
pub struct Cache<V, S = RandomState> {
    label: String,
    store: RwLock<Store<V, S>>,
    counters: Counters,
    metrics_last_accessed: Mutex<Instant>,
}

impl<V> Cache<V, RandomState> {
    /// Creates an empty cache.
    pub fn new() -> Cache<V, RandomState> {
        Cache::with_capacity(0)
    }

    /// Creates an empty cache whose log output is tagged with `label`.
    ///
    /// The label has no effect on behavior.
    pub fn with_label(label: impl Into<String>) -> Cache<V, RandomState> {
        let mut cache = Cache::new();
        cache.label = label.into();
        cache
    }

    /// Creates an empty cache with room for at least `capacity` entries before reallocating.
    ///
    /// This is not a bound. The cache grows as needed and never evicts.
    pub fn with_capacity(capacity: usize) -> Cache<V, RandomState> {
        Cache::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<V> Default for Cache<V, RandomState> {
    fn default() -> Self {
        Cache::new()
    }
}

impl<V, S> Cache<V, S>
where
    S: BuildHasher,
{
    /// Creates an empty cache with room for at least `capacity` entries, using `hash_builder` to
    /// hash the keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Cache<V, S> {
        Self {
            label: DEFAULT_LABEL.to_string(),
            store: RwLock::new(Store::with_capacity_and_hasher(capacity, hash_builder)),
            counters: Counters::default(),
            metrics_last_accessed: Mutex::new(Instant::now()),
        }
    }

    /// Returns the number of entries.
    pub fn count(&self) -> usize {
        self.store.read().size()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.read().contains(key)
    }

    /// Returns the keys currently mapped, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.store.read().keys()
    }

    /// Inserts a value under `key`.
    ///
    /// If the cache did not have this key present, [`None`] is returned. Otherwise the value is
    /// replaced and the old value is returned. The number of entries only grows for new keys.
    pub fn insert(&self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let traced_key = log_enabled!(Level::Trace).then(|| key.clone());

        let previous = {
            let mut store = self.store.write();
            store.upsert(key, value)
        };

        self.counters.increment_insert_count();
        if let Some(key) = traced_key {
            trace!(
                "{}: {} key {key:?}",
                self.label,
                if previous.is_some() { "replaced" } else { "inserted" }
            );
        }

        previous
    }

    /// Removes `key` and returns its value. Removing an absent key does nothing.
    pub fn remove(&self, key: &str) -> Option<V> {
        let removed = {
            let mut store = self.store.write();
            store.delete(key)
        };

        if removed.is_some() {
            self.counters.add_removal_count(1);
            trace!("{}: removed key {key:?}", self.label);
        }

        removed
    }

    /// Assigns `value` to `key`, where assigning [`None`] removes the key.
    ///
    /// Returns the value previously stored under `key`.
    pub fn set(&self, key: impl Into<String>, value: Option<V>) -> Option<V> {
        match value {
            Some(value) => self.insert(key, value),
            None => {
                let key: String = key.into();
                self.remove(&key)
            }
        }
    }

    /// Removes every entry.
    ///
    /// Readers observe either all entries or none of them.
    pub fn reset(&self) {
        let dropped = {
            let mut store = self.store.write();
            store.clear()
        };

        self.counters.add_removal_count(dropped as u64);
        debug!("{}: reset, dropped {dropped} entries", self.label);
    }
}

impl<V, S> Cache<V, S>
where
    V: Clone,
    S: BuildHasher,
{
    /// Returns the value stored under `key`.
    ///
    /// This method clones the value. Consider wrapping your values in [`std::sync::Arc`] if
    /// cloning is too expensive for your use-case.
    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.store.read().lookup(key).cloned();

        match value {
            Some(_) => self.counters.increment_hit_count(),
            None => self.counters.increment_miss_count(),
        }

        value
    }

    /// Returns a copy of all values, in no particular order.
    ///
    /// Later changes to the cache do not affect the returned vector and vice versa.
    pub fn all_items(&self) -> Vec<V> {
        self.store.read().snapshot()
    }

    /// Returns a copy of all key-value pairs, in no particular order.
    pub fn entries(&self) -> Vec<(String, V)> {
        self.store.read().entries()
    }
}

impl<V, S> Cache<V, S>
where
    V: Cachable,
    S: BuildHasher,
{
    /// Inserts `item` under the key it derives for itself.
    ///
    /// Same as `insert(item.cache_key(), item)`.
    pub fn add(&self, item: V) -> Option<V> {
        let key = item.cache_key().into_owned();
        self.insert(key, item)
    }

    /// Removes the entry stored under the key `item` derives for itself.
    ///
    /// The stored value does not need to equal `item`, only the key is compared.
    pub fn remove_item(&self, item: &V) -> Option<V> {
        self.remove(&item.cache_key())
    }
}

impl<V, S> Cache<V, S> {
    /// Returns the label used in log output.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the counters collected since the previous call and resets them.
    ///
    /// Each counter is taken separately, so operations running concurrently with this call may be
    /// counted in some fields of the returned [`Stats`] and left for the next call in others.
    pub fn stats(&self) -> Stats {
        let millis_elapsed = {
            let mut guard = self.metrics_last_accessed.lock();
            let millis_elapsed = guard.elapsed().as_millis();
            *guard = Instant::now();
            millis_elapsed
        };

        self.counters.take(millis_elapsed)
    }
}

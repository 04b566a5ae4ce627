use std::sync::atomic::{AtomicU64, Ordering};

/// Counters collected since the previous call to [`crate::Cache::stats`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Stats {
    pub hit_count: u64,
    pub miss_count: u64,
    pub insert_count: u64,
    pub removal_count: u64,
    pub millis_elapsed: u128,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    insert_count: AtomicU64,
    removal_count: AtomicU64,
}

impl Counters {
    pub(crate) fn increment_hit_count(&self) {
        self.hit_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn increment_miss_count(&self) {
        self.miss_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn increment_insert_count(&self) {
        self.insert_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn add_removal_count(&self, removed: u64) {
        self.removal_count.fetch_add(removed, Ordering::AcqRel);
    }

    /// Reads and zeroes every counter.
    pub(crate) fn take(&self, millis_elapsed: u128) -> Stats {
        Stats {
            hit_count: self.hit_count.swap(0, Ordering::AcqRel),
            miss_count: self.miss_count.swap(0, Ordering::AcqRel),
            insert_count: self.insert_count.swap(0, Ordering::AcqRel),
            removal_count: self.removal_count.swap(0, Ordering::AcqRel),
            millis_elapsed,
        }
    }
}

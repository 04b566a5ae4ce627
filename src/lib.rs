//! A thread-safe, in-memory keyed cache.
//!
//! [`Cache`] maps string keys to values of any type and can be shared between threads without
//! external locking. Reads run in parallel, mutations are exclusive and applied one at a time.
//!
//! # Features
//!
//! - Thread-safe by default - no need for explicit synchronization
//! - Reads never observe a half-applied insert, remove or reset
//! - Values can derive their own key through [`Cachable`]
//! - No eviction and no capacity bound; entries live until removed or reset
//! - No unsafe code
//!
//! # Examples
//!
//! Basic usage with string keys and values:
//!
//! ```rust
//! use keyed_cache::Cache;
//!
//! let cache = Cache::new();
//!
//! cache.insert("key1", "value1");
//! assert_eq!(cache.get("key1"), Some("value1"));
//! assert_eq!(cache.count(), 1);
//! ```
//!
//! Assigning [`None`] removes a key:
//!
//! ```rust
//! use keyed_cache::Cache;
//!
//! let cache = Cache::new();
//!
//! cache.set("key1", Some(1));
//! let old_value = cache.set("key1", None);
//!
//! assert_eq!(old_value, Some(1));
//! assert_eq!(cache.get("key1"), None);
//! ```
//!
//! Values that carry their own key:
//!
//! ```rust
//! use keyed_cache::{Cachable, Cache};
//! use std::borrow::Cow;
//!
//! #[derive(Clone)]
//! struct Artist {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Cachable for Artist {
//!     fn cache_key(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(&self.id)
//!     }
//! }
//!
//! let cache = Cache::with_label("artists");
//! cache.add(Artist { id: "1".into(), name: "Prince".into() });
//! cache.add(Artist { id: "1".into(), name: "David Bowie".into() });
//!
//! assert_eq!(cache.count(), 1);
//! assert_eq!(cache.get("1").map(|artist| artist.name), Some("David Bowie".to_string()));
//! ```
//!
//! Thread-safe usage across multiple threads:
//!
//! ```rust
//! use keyed_cache::Cache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(Cache::new());
//! cache.insert("key1", "value1");
//!
//! let cache_in_arc = Arc::clone(&cache);
//! let handle = thread::spawn(move || {
//!     cache_in_arc.insert("key2", "value2");
//! });
//!
//! handle.join().unwrap();
//!
//! assert_eq!(cache.get("key1"), Some("value1"));
//! assert_eq!(cache.get("key2"), Some("value2"));
//! ```

#![forbid(unsafe_code)]
pub mod cache;

pub use cache::Cache;
pub use cache::cachable::Cachable;
pub use cache::stats::Stats;

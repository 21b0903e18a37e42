//! Concurrent, construct-once cache of prepared per-variant state.
//!
//! [`PreparedStateCache`] maps a key to a lazily built, shared value. It is the
//! only shared mutable structure in the resolution core and provides:
//!
//! - **Single publication**: for any key, at most one value is ever inserted
//!   and every caller observes that same [`Arc`].
//! - **Guarded construction**: the builder runs while the entry's shard lock is
//!   held, so it runs at most once per successful insertion. Racing callers for
//!   the same key block until the builder finishes and then observe its result.
//! - **No poisoned entries**: if the builder fails, nothing is inserted and the
//!   error is returned. The next request for that key builds again.
//!
//! # Locking discipline
//!
//! Because the shard lock is held while building, builders must not call back
//! into the same cache, and must not perform work that should run concurrently
//! with other keys of the same shard. In this crate the builder only prepares a
//! variant (memoized, CPU-bound); artifact selection, which may block on I/O,
//! always runs after the cache has released its lock.
//!
//! # Example
//!
//! ```rust
//! use variant_resolve::cache::PreparedStateCache;
//!
//! let cache: PreparedStateCache<String, usize> = PreparedStateCache::new();
//! let first = cache.get_or_try_insert_with("a".to_string(), || Ok::<_, ()>(1)).unwrap();
//! let second = cache.get_or_try_insert_with("a".to_string(), || Ok::<_, ()>(2)).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(*second, 1);
//! ```

use crate::config::CacheSettings;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Cache of shared, lazily built values keyed by identity.
pub struct PreparedStateCache<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, Arc<V>>,
}

impl<K, V> PreparedStateCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    /// Create an empty cache with default sizing.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Create an empty cache sized according to `settings`.
    ///
    /// A shard amount that is not a power of two greater than one is ignored in
    /// favour of the default sharding; [`CacheSettings::validate`] reports it.
    pub fn with_settings(settings: &CacheSettings) -> Self {
        let entries = match settings.shard_amount {
            Some(shards) if CacheSettings::is_valid_shard_amount(shards) => {
                DashMap::with_capacity_and_shard_amount(settings.initial_capacity, shards)
            }
            _ => DashMap::with_capacity(settings.initial_capacity),
        };
        Self {
            entries,
        }
    }

    /// Return the published value for `key`, building and publishing it first if absent.
    ///
    /// # Errors
    ///
    /// Returns the builder's error unchanged. No entry is left behind.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, build: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        // Fast path: shared read lock only.
        if let Some(existing) = self.entries.get(&key) {
            tracing::trace!(target: "variant_cache", "cache hit for '{}'", key);
            return Ok(Arc::clone(existing.value()));
        }

        match self.entries.entry(key) {
            Entry::Occupied(occupied) => {
                // Another caller published between our read and our write lock.
                Ok(Arc::clone(occupied.get()))
            }
            Entry::Vacant(vacant) => {
                tracing::debug!(target: "variant_cache", "building state for '{}'", vacant.key());
                match build() {
                    Ok(value) => {
                        let value = Arc::new(value);
                        vacant.insert(Arc::clone(&value));
                        Ok(value)
                    }
                    Err(err) => {
                        tracing::debug!(
                            target: "variant_cache",
                            "building state for '{}' failed; entry not cached",
                            vacant.key()
                        );
                        Err(err)
                    }
                }
            }
        }
    }

    /// Return the published value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether a value has been published for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of published values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for PreparedStateCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for PreparedStateCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedStateCache").field("len", &self.entries.len()).finish()
    }
}

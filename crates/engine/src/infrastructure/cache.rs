//! Process-wide response cache.
//!
//! Entries live for the lifetime of the process: there is no expiry and no
//! eviction. Reads and writes lock a single shard, so unrelated keys never
//! contend and no operation observes more than one key atomically.

use std::collections::HashSet;

use dashmap::DashMap;

/// A thread-safe string-keyed cache without expiration.
pub struct ResponseCache<V> {
    entries: DashMap<String, V>,
}

impl<V> ResponseCache<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert a value, replacing any existing entry.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Suffixes of every key starting with `prefix`.
    ///
    /// `keys_with_prefix("move-")` over `move-1`, `move-33`, `pokemon-1`
    /// yields `{"1", "33"}`.
    pub fn keys_with_prefix(&self, prefix: &str) -> HashSet<String> {
        self.entries
            .iter()
            .filter_map(|entry| entry.key().strip_prefix(prefix).map(str::to_string))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ResponseCache<V>
where
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

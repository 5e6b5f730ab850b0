use crate::db::list::{Iter, RecencyList};
use crate::db::map::Index;
use crate::error::DatabaseError;
use metrics::{counter, describe_counter};
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use tracing::{debug, trace};

const METRIC_EVICTED_KEY: &str = "lru_evicted_keys";
const METRIC_EVICTED_KEY_DESC: &str = "number of keys evicted to make room for new ones";
const METRIC_HITS: &str = "lru_hits";
const METRIC_HITS_DESC: &str = "number of get calls that found their key";
const METRIC_MISSES: &str = "lru_misses";
const METRIC_MISSES_DESC: &str = "number of get calls that did not find their key";

/// LruCache is a fixed capacity key/value cache evicting the least recently used entry first.
///
/// It combines an index (key to arena slot) with a recency list (arena of entries linked from
/// most to least recently used). Both `get` and `put` count as a use of the key.
/// All operations are O(1).
///
/// The cache is not synchronized. To share it between threads, wrap the whole cache in a
/// single `Mutex` so that the index and the list are always updated together.
///
/// # Example
///
/// ```
/// use lrucache::db::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.put(1, "one");
/// cache.put(2, "two");
/// assert_eq!(cache.get(&1), Some(&"one"));
///
/// // 2 is now the least recently used key
/// cache.put(3, "three");
/// assert_eq!(cache.get(&2), None);
/// ```
pub struct LruCache<K, V> {
    index: Index<K>,
    order: RecencyList<K, V>,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// new creates an empty cache holding at most `capacity` entries.
    /// A capacity of zero cannot hold anything and is rejected.
    pub fn new(capacity: usize) -> Result<Self, DatabaseError> {
        if capacity == 0 {
            return Err(DatabaseError::InvalidCapacity(capacity));
        }
        describe_counter!(METRIC_EVICTED_KEY, METRIC_EVICTED_KEY_DESC);
        describe_counter!(METRIC_HITS, METRIC_HITS_DESC);
        describe_counter!(METRIC_MISSES, METRIC_MISSES_DESC);
        debug!(capacity, "lru cache created");
        Ok(LruCache {
            index: Index::new(capacity),
            order: RecencyList::new(capacity),
        })
    }

    /// get returns the value stored for `key` and marks the key as the most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = match self.index.get(key) {
            Some(slot) => slot,
            None => {
                counter!(METRIC_MISSES).increment(1);
                return None;
            }
        };
        counter!(METRIC_HITS).increment(1);
        self.order.move_to_front(slot);
        self.order.get(slot).map(|entry| &entry.value)
    }

    /// put sets the value of `key` and makes it the most recently used key.
    /// If the key is new and the cache is full, the least recently used entry is evicted first.
    pub fn put(&mut self, key: K, value: V) {
        // update in place
        if let Some(slot) = self.index.get(&key) {
            // an indexed slot always holds a live entry, anything else is a bug
            let entry = self
                .order
                .get_mut(slot)
                .expect("index points to a slot with no entry, this is clearly a bug");
            entry.value = value;
            self.order.move_to_front(slot);
            return;
        }

        if self.index.is_full() {
            self.evict();
        }
        let slot = self.order.push_front(key.clone(), value);
        self.index.set(key, slot);
    }

    /// remove deletes `key` from the cache and returns its value, if it was there.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let entry = self.order.remove(slot)?;
        trace!(len = self.len(), "entry removed");
        Some(entry.value)
    }

    /// peek returns the value of `key` without changing its position.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.get(key)?;
        self.order.get(slot).map(|entry| &entry.value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.index.max_items()
    }

    /// iter yields the entries from the most recently used to the least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.order.iter()
    }

    /// clear drops every entry. The capacity is kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
        debug!("lru cache cleared");
    }

    fn evict(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            counter!(METRIC_EVICTED_KEY).increment(1);
            debug!(len = self.index.len(), "evicted least recently used entry");
        }
    }
}

impl<K: Hash + Eq, V> Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LruCache{{capacity: {}, len: {}}}",
            self.index.max_items(),
            self.order.len()
        )
    }
}

use crate::db::MAX_PREALLOCATED_ENTRIES;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Index maps each cached key to the arena slot holding its entry.
/// It does not own the entries, the recency list does.
pub struct Index<K> {
    max_items: usize,
    data: FxHashMap<K, usize>,
}

impl<K: Hash + Eq> Index<K> {
    pub fn new(max_items: usize) -> Self {
        let mut data = FxHashMap::default();
        data.reserve(max_items.min(MAX_PREALLOCATED_ENTRIES));
        Self { max_items, data }
    }

    /// is_full checks if the index reached its capacity and the next insertion needs an eviction.
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.max_items
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.get(key).copied()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }

    /// set registers the slot of a key. Returns the previous slot if the key was known.
    pub fn set(&mut self, key: K, slot: usize) -> Option<usize> {
        self.data.insert(key, slot)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.remove(key)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

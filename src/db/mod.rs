mod list;
mod lru;
mod map;

pub use list::Iter;
pub use lru::LruCache;

/// Upper bound on the entries storage is pre-sized for. Larger caches grow on demand.
pub(crate) const MAX_PREALLOCATED_ENTRIES: usize = 1024;

/// Entry represents a cache item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

use crate::db::{Entry, MAX_PREALLOCATED_ENTRIES};

/// Slot of the most-recent end sentinel.
pub(crate) const HEAD: usize = 0;
/// Slot of the least-recent end sentinel.
pub(crate) const TAIL: usize = 1;

/// Node is one cell of the arena. Sentinels and free cells carry no entry.
struct Node<K, V> {
    entry: Option<Entry<K, V>>,
    prev: usize,
    next: usize,
}

impl<K, V> Node<K, V> {
    fn empty() -> Self {
        Node {
            entry: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// RecencyList keeps entries ordered from most recently used (right after `HEAD`) to least
/// recently used (right before `TAIL`). Nodes live in a growable arena and link to each other
/// through slot indices, so nothing is ever aliased. Freed slots go to a free list and are
/// reused by the next insertion.
pub struct RecencyList<K, V> {
    nodes: Vec<Node<K, V>>,
    free: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// new creates a list made only of the two sentinels, pointing at each other.
    /// `capacity` is a hint used to size the arena, capped so that huge caches do not
    /// allocate up front.
    pub fn new(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.min(MAX_PREALLOCATED_ENTRIES) + 2);
        nodes.push(Node::empty());
        nodes.push(Node::empty());
        RecencyList {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// push_front stores a new entry right after the most-recent end and returns its slot.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let node = Node {
            entry: Some(Entry { key, value }),
            prev: HEAD,
            next: TAIL,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.attach_front(slot);
        self.len += 1;
        slot
    }

    /// move_to_front marks the entry at `slot` as the most recently used one.
    pub fn move_to_front(&mut self, slot: usize) {
        if self.nodes[HEAD].next == slot {
            return;
        }
        self.detach(slot);
        self.attach_front(slot);
    }

    /// pop_back removes the least recently used entry, the one right before `TAIL`.
    pub fn pop_back(&mut self) -> Option<Entry<K, V>> {
        let slot = self.nodes[TAIL].prev;
        if slot == HEAD {
            return None;
        }
        self.remove(slot)
    }

    /// remove unlinks the entry at `slot` and hands its cell back to the free list.
    pub fn remove(&mut self, slot: usize) -> Option<Entry<K, V>> {
        if slot == HEAD || slot == TAIL {
            return None;
        }
        let entry = self.nodes.get_mut(slot)?.entry.take()?;
        self.detach(slot);
        self.free.push(slot);
        self.len -= 1;
        Some(entry)
    }

    pub fn get(&self, slot: usize) -> Option<&Entry<K, V>> {
        self.nodes.get(slot)?.entry.as_ref()
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Entry<K, V>> {
        self.nodes.get_mut(slot)?.entry.as_mut()
    }

    /// clear drops every entry and shrinks the arena back to the two sentinels.
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.nodes[HEAD] = Node::empty();
        self.nodes[TAIL] = Node::empty();
        self.free.clear();
        self.len = 0;
    }

    /// iter walks the entries from most recently used to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.nodes[HEAD].next,
            remaining: self.len,
        }
    }

    fn attach_front(&mut self, slot: usize) {
        let first = self.nodes[HEAD].next;
        self.nodes[slot].prev = HEAD;
        self.nodes[slot].next = first;
        self.nodes[first].prev = slot;
        self.nodes[HEAD].next = slot;
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Number of cells in the arena, sentinels included.
    #[cfg(test)]
    pub(crate) fn arena_size(&self) -> usize {
        self.nodes.len()
    }

    /// Slots from `TAIL` back to `HEAD`, excluding the sentinels.
    #[cfg(test)]
    pub(crate) fn backward_slots(&self) -> Vec<usize> {
        let mut slots = Vec::new();
        let mut cursor = self.nodes[TAIL].prev;
        while cursor != HEAD {
            slots.push(cursor);
            cursor = self.nodes[cursor].prev;
        }
        slots
    }

    /// Slots from `HEAD` to `TAIL`, excluding the sentinels.
    #[cfg(test)]
    pub(crate) fn forward_slots(&self) -> Vec<usize> {
        let mut slots = Vec::new();
        let mut cursor = self.nodes[HEAD].next;
        while cursor != TAIL {
            slots.push(cursor);
            cursor = self.nodes[cursor].next;
        }
        slots
    }
}

pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        node.entry.as_ref().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

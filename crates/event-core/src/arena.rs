//! Insertion-ordered storage for owned sub-entities.

use std::collections::HashMap;
use std::hash::Hash;

/// Id-keyed storage that remembers insertion order.
///
/// Aggregates own their sub-entities through arenas: lookups go by stable
/// id, iteration follows the order entries were first inserted. Mutation is
/// reserved for the owning aggregate's apply step; everyone else reads.
#[derive(Debug, Clone)]
pub struct Arena<K, V> {
    order: Vec<K>,
    entries: HashMap<K, V>,
}

// Not derived: the derive would demand Default from K and V, which ids and
// entities do not implement.
impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Arena<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the arena holds nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when an entry with this id exists.
    pub fn contains(&self, id: K) -> bool {
        self.entries.contains_key(&id)
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: K) -> Option<&V> {
        self.entries.get(&id)
    }

    /// Looks up an entry by id for mutation.
    pub fn get_mut(&mut self, id: K) -> Option<&mut V> {
        self.entries.get_mut(&id)
    }

    /// Inserts an entry at the end of the iteration order.
    ///
    /// Returns false and leaves the arena untouched when the id is already
    /// present; entries are never overwritten in place.
    pub fn insert(&mut self, id: K, value: V) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.order.push(id);
        self.entries.insert(id, value);
        true
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }
}

impl<K, V> PartialEq for Arena<K, V>
where
    K: Copy + Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.entries == other.entries
    }
}

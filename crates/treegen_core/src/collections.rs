//! Custom collection types used by the generator.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// An ordered map that preserves insertion order.
///
/// Entries are never reordered: iteration always yields them in the order
/// they were first inserted. The schema registry relies on this to emit
/// kinds in registration order.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Append `value` under `key` unless the key is already present.
    ///
    /// On a collision the map is left untouched and the value is handed back
    /// together with the position of the existing entry.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<&V, (usize, V)> {
        if let Some(&idx) = self.index.get(&key) {
            return Err((idx, value));
        }
        let idx = self.entries.len();
        self.index.insert(key.clone(), idx);
        self.entries.push((key, value));
        Ok(&self.entries[idx].1)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/*!
# Generalized Maps

This module provides abstractions over `Map` data structures, allowing algorithms
to choose the most efficient implementation based on context:
- sparse maps -> `HashMap`,
- dense maps over node indices -> `Vec<NodeIndex>` with [`INVALID_NODE`] marking absent keys.
*/

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use crate::node::*;

/// Minimalist trait for map-like collections.
pub trait Map<K, V> {
    /// Inserts an `(key, value)` pair into the map.
    /// If the key was present before, returns the previous value, otherwise returns `None`.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes a key from the map and returns the associated value if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns a reference to the value corresponding to the given key, or `None` if the key is not present.
    fn get(&self, key: &K) -> Option<&V>;

    /// Clears all elements from the map.
    fn clear(&mut self);
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

/// Parent-arrays: `Vec<NodeIndex>` of length `n` usable as `Map`.
/// ** Panics if a key is `>= n` **
impl Map<NodeIndex, NodeIndex> for Vec<NodeIndex> {
    fn insert(&mut self, key: NodeIndex, value: NodeIndex) -> Option<NodeIndex> {
        let prev = std::mem::replace(&mut self[key as usize], value);
        (prev != INVALID_NODE).then_some(prev)
    }

    fn remove(&mut self, key: &NodeIndex) -> Option<NodeIndex> {
        let prev = std::mem::replace(&mut self[*key as usize], INVALID_NODE);
        (prev != INVALID_NODE).then_some(prev)
    }

    fn get(&self, key: &NodeIndex) -> Option<&NodeIndex> {
        self.as_slice()
            .get(*key as usize)
            .filter(|&&v| v != INVALID_NODE)
    }

    fn clear(&mut self) {
        self.iter_mut().for_each(|x| *x = INVALID_NODE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_array() {
        let mut parents = vec![INVALID_NODE; 4];
        assert_eq!(Map::insert(&mut parents, 2, 0), None);
        assert_eq!(Map::insert(&mut parents, 2, 1), Some(0));
        assert_eq!(Map::get(&parents, &2), Some(&1));
        assert_eq!(Map::get(&parents, &3), None);
        assert_eq!(Map::remove(&mut parents, &2), Some(1));
        assert_eq!(Map::get(&parents, &2), None);
    }
}

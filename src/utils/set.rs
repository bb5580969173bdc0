/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to choose the most efficient implementation based on context:
- sparse sets over arbitrary values -> `HashSet`,
- dense sets over node indices -> [`NodeBitSet`].
*/

use std::{
    collections::{HashSet, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::Cloned,
};

use stream_bitset::prelude::{
    BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream,
};

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was not present before.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Set<NodeIndex> for NodeBitSet {
    fn insert(&mut self, value: NodeIndex) -> bool {
        !self.set_bit(value)
    }

    fn remove(&mut self, value: &NodeIndex) -> bool {
        self.clear_bit(*value)
    }

    type SetIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, NodeIndex, true>
    where
        Self: 'a,
        NodeIndex: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.bitmask_stream().iter_set_bits()
    }

    fn contains(&self, value: &NodeIndex) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn len(&self) -> usize {
        self.cardinality() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn node_bit_set() {
        let mut set = NodeBitSet::new(10);
        assert!(Set::is_empty(&set));

        assert!(Set::insert(&mut set, 3));
        assert!(Set::insert(&mut set, 7));
        assert!(Set::insert(&mut set, 1));
        assert!(!Set::insert(&mut set, 7));
        assert_eq!(Set::len(&set), 3);
        assert_eq!(Set::iter(&set).collect_vec(), vec![1, 3, 7]);

        assert!(Set::remove(&mut set, &3));
        assert!(!Set::remove(&mut set, &3));
        assert!(!Set::contains(&set, &3));
        assert!(Set::contains(&set, &1));
        assert_eq!(Set::len(&set), 2);

        Set::clear(&mut set);
        assert!(Set::is_empty(&set));
        assert!(Set::insert(&mut set, 7));
    }

    #[test]
    fn hash_set() {
        let mut set: fxhash::FxHashSet<&str> = Default::default();
        assert!(Set::insert(&mut set, "a"));
        assert!(!Set::insert(&mut set, "a"));
        assert!(Set::contains(&set, &"a"));
        assert_eq!(Set::len(&set), 1);
    }
}

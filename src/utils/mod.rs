/*!
# Utilities

Provides abstractions over [`Set`] and [`Map`] so that algorithms can choose how their scratch
state (visited markers, parent pointers) is stored, together with [`FromCapacity`] to allocate
that state up front.

You probably do not need to interact with this module directly.
*/

use std::{
    collections::{HashMap, HashSet},
    hash::RandomState,
};

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::node::*;

pub mod map;
pub mod set;

pub use map::Map;
pub use set::Set;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probility(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// Note that this should mainly be used in conjunction with either [`Set`] or [`Map`]
/// datastructures.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// Dense structures allocate `total`, sparse structures `used`. If you only have one value
    /// as an upper bound, provide it as both arguments.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // A dense set must be able to hold the maximum index
        Self::new(total as NumNodes)
    }
}

impl FromCapacity for Vec<NodeIndex> {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Parent-arrays are dense and start out with every entry unset
        vec![INVALID_NODE; total]
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

impl<K, V> FromCapacity for HashMap<K, V, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

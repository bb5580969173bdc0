/*!
# Node Representation

Graphs in this crate are keyed by arbitrary caller-supplied **values** (`String`, `u32`, a grid
cell, ...). Internally every value is assigned a dense [`NodeIndex`] in insertion order, i.e. the
`i`-th inserted value has index `i`. Algorithms run on these indices and only map back to values
at the very end.

We choose `NodeIndex = u32` as almost all use-cases involve less than `2^32` nodes.
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};
use stream_bitset::bitset::BitSetImpl;

/// Any value that can be stored as a node: it must be comparable, hashable and cheaply
/// clonable as it is stored both in the arena and in the lookup-table of a graph.
pub trait NodeValue: Clone + Eq + Hash + Debug {}

impl<T> NodeValue for T where T: Clone + Eq + Hash + Debug {}

/// Dense index of a node inside a graph, ranging from `0` to `n - 1`
pub type NodeIndex = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = NodeIndex;

/// Index-Value that is considered invalid
pub const INVALID_NODE: NodeIndex = NodeIndex::MAX;

/// Dense set over the node indices `0..n`
pub type NodeBitSet = BitSetImpl<NodeIndex>;

/// Hash-set of node values
pub type ValueSet<T> = FxHashSet<T>;

/// Hash-map keyed by node values
pub type ValueMap<T, V> = FxHashMap<T, V>;

/*!
# Graph Representations

Graphs are stored as an **arena + index**: node values live in insertion order in a `Vec`, a hash
map translates values to their dense [`NodeIndex`], and adjacency is a `Vec` of [`Neighborhood`]s
indexed by node index. The [`Neighborhood`] decides whether edges carry a label:

- [`UnweightedGraph<T>`] uses [`ArrNeighborhood`] (plain neighbor indices),
- [`WeightedGraph<T>`] uses [`WeightedNeighborhood`] (neighbor indices with a [`Weight`]).

Both are aliases of the generic [`LabelledGraph`] so that all operations and algorithms are written
once. In addition, [`AdjacencyView`] provides read-only index-level views (transposed,
direction-less) of an existing graph.
*/

use std::fmt::Debug;

use crate::{edge::*, node::*};

mod labelled;
mod neighborhood;
mod view;

pub use labelled::*;
pub use neighborhood::*;
pub use view::*;

/// Trait for methods on the (outgoing) Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default + Debug {
    /// Label attached to each neighbor
    type Label: EdgeLabel;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = NodeIndex> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in insertion order
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns an iterator over all neighbors together with their labels in insertion order
    fn labelled_neighbors(&self) -> impl Iterator<Item = (NodeIndex, Self::Label)> + '_;

    /// Returns the label of neighbor `v` if present
    fn label_of(&self, v: NodeIndex) -> Option<Self::Label>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: NodeIndex) -> bool {
        self.label_of(v).is_some()
    }

    /// Adds a neighbor or overwrites its label in place.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, v: NodeIndex, label: Self::Label) -> bool;

    /// Tries to remove a neighbor from the Neighborhood while keeping the order of the others.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, v: NodeIndex) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

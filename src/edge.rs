/*!
# Edge Representation

Edges are directed and typed by the graph they belong to:
- [`Edge<T>`] connects two node values without any further information,
- [`WeightedEdge<T>`] additionally carries a non-negative [`Weight`].

An *undirected* connection is never stored as such: it is represented by two opposite directed
edges with equal label (see [`GraphEdge::opposite`]).

Both edge kinds are unified by the [`GraphEdge`] trait, whose associated [`EdgeLabel`] is `()` for
unweighted and [`Weight`] for weighted edges. The label in turn knows its edge type, which allows a
graph to be generic over its neighborhood while still accepting only its own edge kind.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use crate::{error::*, node::*};

/// Edge weights are signed so that negative inputs can be detected and rejected
pub type Weight = i64;

/// Sentinel that is larger than any achievable path cost
pub const WEIGHT_INFINITY: Weight = Weight::MAX;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Information attached to every edge of a graph.
pub trait EdgeLabel: Copy + Eq + Hash + Debug + 'static {
    /// The edge type carrying this label
    type Edge<T: NodeValue>: GraphEdge<T, Label = Self>;

    /// Label used by generators if no explicit label is requested
    fn unit() -> Self;

    /// Returns the label if it may be stored in a graph
    fn validate(self) -> Result<Self>;

    /// Returns the label as a capacity/path-cost
    fn as_weight(self) -> Weight;
}

impl EdgeLabel for () {
    type Edge<T: NodeValue> = Edge<T>;

    fn unit() -> Self {}

    fn validate(self) -> Result<Self> {
        Ok(())
    }

    /// Unweighted edges count as one hop
    fn as_weight(self) -> Weight {
        1
    }
}

impl EdgeLabel for Weight {
    type Edge<T: NodeValue> = WeightedEdge<T>;

    fn unit() -> Self {
        1
    }

    fn validate(self) -> Result<Self> {
        if self < 0 {
            Err(GraphError::NegativeWeight(self))
        } else {
            Ok(self)
        }
    }

    fn as_weight(self) -> Weight {
        self
    }
}

/// Common interface of all directed edges
pub trait GraphEdge<T: NodeValue>: Clone + Eq + Hash + Debug {
    /// Either `()` or `Weight`
    type Label: EdgeLabel;

    /// Creates the edge `source -> target` with the given label
    fn from_parts(source: T, target: T, label: Self::Label) -> Self;

    /// Splits the edge into `(source, target, label)`
    fn into_parts(self) -> (T, T, Self::Label);

    /// The node the edge starts at
    fn source(&self) -> &T;

    /// The node the edge points to
    fn target(&self) -> &T;

    /// The label attached to the edge
    fn label(&self) -> Self::Label;

    /// Returns the edge with swapped endpoints and the same label
    fn opposite(&self) -> Self {
        Self::from_parts(self.target().clone(), self.source().clone(), self.label())
    }

    /// Returns *true* if both endpoints are equal
    fn is_loop(&self) -> bool {
        self.source() == self.target()
    }
}

/// A directed, unweighted edge `source -> target`
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Edge<T>(pub T, pub T);

/// A directed edge `source -> target` with a non-negative weight
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WeightedEdge<T>(pub T, pub T, pub Weight);

impl<T: NodeValue> GraphEdge<T> for Edge<T> {
    type Label = ();

    fn from_parts(source: T, target: T, _: ()) -> Self {
        Edge(source, target)
    }

    fn into_parts(self) -> (T, T, ()) {
        (self.0, self.1, ())
    }

    fn source(&self) -> &T {
        &self.0
    }

    fn target(&self) -> &T {
        &self.1
    }

    fn label(&self) -> Self::Label {}
}

impl<T: NodeValue> GraphEdge<T> for WeightedEdge<T> {
    type Label = Weight;

    fn from_parts(source: T, target: T, weight: Weight) -> Self {
        WeightedEdge(source, target, weight)
    }

    fn into_parts(self) -> (T, T, Weight) {
        (self.0, self.1, self.2)
    }

    fn source(&self) -> &T {
        &self.0
    }

    fn target(&self) -> &T {
        &self.1
    }

    fn label(&self) -> Weight {
        self.2
    }
}

impl<T> WeightedEdge<T> {
    /// The weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }
}

impl<T: Display> Display for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -> {})", self.0, self.1)
    }
}

impl<T: Display> Display for WeightedEdge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -{}-> {})", self.0, self.2, self.1)
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from(value: (T, T)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<T: Clone> From<&(T, T)> for Edge<T> {
    fn from(value: &(T, T)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<T> From<(T, T, Weight)> for WeightedEdge<T> {
    fn from(value: (T, T, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<T: Clone> From<&(T, T, Weight)> for WeightedEdge<T> {
    fn from(value: &(T, T, Weight)) -> Self {
        WeightedEdge(value.0.clone(), value.1.clone(), value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keeps_label() {
        let e = WeightedEdge("a", "b", 7);
        assert_eq!(e.opposite(), WeightedEdge("b", "a", 7));
        assert_eq!(e.opposite().opposite(), e);

        let e = Edge(1, 2);
        assert_eq!(e.opposite(), Edge(2, 1));
        assert!(!e.is_loop());
        assert!(Edge(3, 3).is_loop());
    }

    #[test]
    fn weight_validation() {
        assert_eq!((0 as Weight).validate().unwrap(), 0);
        assert_eq!((42 as Weight).validate().unwrap(), 42);
        assert!(matches!(
            (-1 as Weight).validate(),
            Err(GraphError::NegativeWeight(-1))
        ));
        assert!(().validate().is_ok());
    }

    #[test]
    fn conversions() {
        let e: Edge<u32> = (1, 2).into();
        assert_eq!(e, Edge(1, 2));
        let e: WeightedEdge<&str> = (&("x", "y", 3)).into();
        assert_eq!(e.weight(), 3);
        assert_eq!(format!("{e}"), "(x -3-> y)");
    }
}

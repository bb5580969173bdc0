/*!
# Labelled Graph

[`LabelledGraph`] is the single storage backend of this crate. It is generic over the node value
type `T` and over the [`Neighborhood`] `N`, which fixes the edge label (and thereby the edge type):

- [`UnweightedGraph<T>`] accepts only [`Edge<T>`],
- [`WeightedGraph<T>`] accepts only [`WeightedEdge<T>`].

Two graphs compare equal iff their node sets and edge sets are equal, independent of the order in
which nodes and edges were inserted.

# Examples
```
use vgraphs::prelude::*;

let mut g = WeightedGraph::new();
g.add_nodes(["a", "b", "c"]).unwrap();
g.add_undirected_edge(WeightedEdge("a", "b", 3)).unwrap();

assert_eq!(g.weight(&"b", &"a").unwrap(), Some(3));
assert!(g.neighbors(&"c").unwrap().is_empty());
assert_eq!(g.transpose(), g);
```
*/

use std::fmt::Debug;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{ops::*, testing::test_graph_ops};

use super::*;

/// A directed graph over node values `T` with neighborhoods `N`
#[derive(Clone)]
pub struct LabelledGraph<T, N>
where
    N: Neighborhood,
{
    values: Vec<T>,
    index: FxHashMap<T, NodeIndex>,
    nbs: Vec<N>,
    num_edges: NumEdges,
}

/// Graph whose edges carry no information
pub type UnweightedGraph<T> = LabelledGraph<T, ArrNeighborhood>;

/// Graph whose edges carry a non-negative [`Weight`]
pub type WeightedGraph<T> = LabelledGraph<T, WeightedNeighborhood>;

impl<T, N> LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn assert_node(&self, u: NodeIndex) {
        assert!(
            (u as usize) < self.values.len(),
            "node index {u} out of range for a graph with {} nodes",
            self.values.len()
        );
    }
}

impl<T, N> Default for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N> GraphNodeOrder for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn number_of_nodes(&self) -> NumNodes {
        self.values.len() as NumNodes
    }
}

impl<T, N> GraphEdgeOrder for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<T, N> AdjacencyList for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    type NeighborIter<'a>
        = <N as Neighborhood>::NeighborhoodIter<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: NodeIndex) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: NodeIndex) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<T, N> AdjacencyTest for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn has_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.assert_node(v);
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<T, N> NodeLookup for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    type Value = T;

    fn value_of(&self, u: NodeIndex) -> &T {
        &self.values[u as usize]
    }

    fn index_of(&self, value: &T) -> Option<NodeIndex> {
        self.index.get(value).copied()
    }
}

impl<T, N> GraphNew for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn new() -> Self {
        Self {
            values: Vec::new(),
            index: FxHashMap::default(),
            nbs: Vec::new(),
            num_edges: 0,
        }
    }

    fn with_capacity(n: NumNodes) -> Self {
        let n = n as usize;
        Self {
            values: Vec::with_capacity(n),
            index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            nbs: Vec::with_capacity(n),
            num_edges: 0,
        }
    }
}

impl<T, N> GraphNodeEditing for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn try_add_node(&mut self, value: T) -> (NodeIndex, bool) {
        if let Some(&u) = self.index.get(&value) {
            return (u, true);
        }

        let u = self.values.len() as NodeIndex;
        assert_ne!(u, INVALID_NODE, "too many nodes");

        self.index.insert(value.clone(), u);
        self.values.push(value);
        self.nbs.push(N::default());
        (u, false)
    }
}

impl<T, N> GraphEdgeEditing for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    type Label = N::Label;

    fn label_of(&self, u: NodeIndex, v: NodeIndex) -> Option<N::Label> {
        self.assert_node(v);
        self.nbs[u as usize].label_of(v)
    }

    fn labelled_neighbors_of(
        &self,
        u: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, N::Label)> + '_ {
        self.nbs[u as usize].labelled_neighbors()
    }

    fn try_add_edge(&mut self, u: NodeIndex, v: NodeIndex, label: N::Label) -> bool {
        self.assert_node(v);
        let existed = self.nbs[u as usize].try_add_neighbor(v, label);
        if !existed {
            self.num_edges += 1;
        }
        existed
    }

    fn try_remove_edge(&mut self, u: NodeIndex, v: NodeIndex) -> bool {
        self.assert_node(v);
        if self.nbs[u as usize].try_remove_neighbor(v) {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<T, N> PartialEq for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn eq(&self, other: &Self) -> bool {
        self.number_of_nodes() == other.number_of_nodes()
            && self.number_of_edges() == other.number_of_edges()
            && self.node_set() == other.node_set()
            && self.edge_set() == other.edge_set()
    }
}

impl<T, N> Eq for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
}

impl<T, N> Debug for LabelledGraph<T, N>
where
    T: NodeValue,
    N: Neighborhood,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelledGraph")
            .field("nodes", &self.values)
            .field("edges", &self.edges().collect_vec())
            .finish()
    }
}

test_graph_ops!(
    test_unweighted,
    UnweightedGraph<u32>,
    (GraphNew, GraphNodeEditing, GraphEdgeEditing, GraphCopy, GraphDirection)
);

test_graph_ops!(
    test_weighted,
    WeightedGraph<u32>,
    (GraphNew, GraphNodeEditing, GraphEdgeEditing, GraphCopy, GraphDirection)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn unweighted_edges_are_idempotent() {
        let mut g = UnweightedGraph::new();
        g.add_nodes(["A", "B", "C"]).unwrap();
        g.add_directed_edge(Edge("A", "B")).unwrap();
        g.add_directed_edge(Edge("A", "B")).unwrap();

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.edges().collect_vec(), vec![Edge("A", "B")]);
        assert!(g.is_directed());

        g.add_undirected_edge(("A", "B")).unwrap();
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.is_undirected());
    }

    #[test]
    fn weighted_edges_overwrite() {
        let mut g = WeightedGraph::new();
        g.add_nodes([1, 2]).unwrap();
        g.add_directed_edge((1, 2, 5)).unwrap();
        g.add_directed_edge((1, 2, 8)).unwrap();

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.weight(&1, &2).unwrap(), Some(8));
        assert_eq!(g.weight(&2, &1).unwrap(), None);
    }

    #[test]
    fn edge_insertion_failures_leave_graph_untouched() {
        let mut g = WeightedGraph::new();
        g.add_nodes(['x', 'y']).unwrap();

        assert_eq!(
            g.add_directed_edge(('x', 'z', 1)),
            Err(GraphError::NodeNotFound("'z'".into()))
        );
        assert_eq!(
            g.add_undirected_edge(('x', 'y', -4)),
            Err(GraphError::NegativeWeight(-4))
        );
        assert_eq!(
            g.add_directed_edges([('x', 'y', 1), ('y', 'q', 1)]),
            Err(GraphError::NodeNotFound("'q'".into()))
        );
        assert!(g.is_edgeless());
    }

    #[test]
    fn weighted_extras() {
        let mut g = WeightedGraph::new();
        g.add_nodes(["a", "b", "c"]).unwrap();
        g.add_directed_edges([("a", "b", 4), ("a", "c", 9), ("c", "b", 2)])
            .unwrap();

        assert_eq!(g.edges_from(&"a").unwrap(), vec![("b", 4), ("c", 9)]);
        assert_eq!(g.all_weights(), vec![4, 9, 2]);
        assert_eq!(g.max_weight(), Some(9));

        assert!(g.remove_edge_if_existing(&"a", &"c").unwrap());
        assert!(!g.remove_edge_if_existing(&"a", &"c").unwrap());
        assert_eq!(g.max_weight(), Some(4));
        assert_eq!(g.number_of_edges(), 2);

        assert!(g.edges_from(&"d").is_err());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut g1 = UnweightedGraph::new();
        g1.add_nodes([1, 2, 3]).unwrap();
        g1.add_directed_edges([(1, 2), (2, 3)]).unwrap();

        let mut g2 = UnweightedGraph::new();
        g2.add_nodes([3, 1, 2]).unwrap();
        g2.add_directed_edges([(2, 3), (1, 2)]).unwrap();

        assert_eq!(g1, g2);

        g2.add_directed_edge((3, 1)).unwrap();
        assert_ne!(g1, g2);
    }

    #[test]
    fn upstream_neighbors() {
        let g = UnweightedGraph::from_edges(
            ["Enno", "Cori", "Max", "Jonas"],
            [("Cori", "Enno"), ("Jonas", "Enno"), ("Enno", "Max")],
        )
        .unwrap();

        let mut upstream = g.upstream_neighbors(&"Enno").unwrap().into_iter().collect_vec();
        upstream.sort();
        assert_eq!(upstream, vec!["Cori", "Jonas"]);
        assert!(g.upstream_neighbors(&"Cori").unwrap().is_empty());
        assert_eq!(g.in_degrees(), vec![2, 0, 1, 0]);
    }

    #[test]
    #[should_panic]
    fn index_layer_panics_out_of_range() {
        let mut g: UnweightedGraph<u8> = UnweightedGraph::new();
        g.add_node(0).unwrap();
        g.has_edge(0, 1);
    }
}

/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

They work on node indices and label every new edge with the provided label.

# Example

```rust
use vgraphs::{prelude::*, gens::*};

let mut g = UnweightedGraph::new();
g.add_nodes(0..5).unwrap();
g.connect_path([0, 1, 2], ());
g.connect_cycle([2, 3, 4], ());

assert_eq!(
    g.edges().collect::<Vec<_>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Existing edges between the affected nodes are relabelled.
pub trait GeneratorSubstructures: GraphEdgeEditing {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single directed edge.
    /// ** Panics if a node is out of range **
    fn connect_path<P>(&mut self, nodes_on_path: P, label: Self::Label)
    where
        P: IntoIterator<Item = NodeIndex>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v, label);
        }
    }

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// A single node thus receives a self-loop.
    /// ** Panics if a node is out of range **
    ///
    /// # Example
    /// ```rust
    /// use vgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_nodes(["a", "b", "c"]).unwrap();
    /// g.connect_cycle(0..3, 7);
    ///
    /// assert_eq!(g.weight(&"c", &"a").unwrap(), Some(7));
    /// assert_eq!(g.number_of_edges(), 3);
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, label: Self::Label)
    where
        C: IntoIterator<Item = NodeIndex>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.try_add_edge(prev, cur, label);
                prev = cur;
            }

            self.try_add_edge(prev, first, label);
        }
    }

    /// Connects all given nodes into a **clique** (complete subgraph) with edges in both
    /// directions. No self-loops are added.
    /// ** Panics if a node is out of range **
    ///
    /// # Example
    /// ```rust
    /// use vgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = UnweightedGraph::new();
    /// g.add_nodes(0..4).unwrap();
    /// g.connect_clique([0, 1, 3], ());
    ///
    /// assert_eq!(g.number_of_edges(), 6);
    /// assert!(g.is_undirected());
    /// ```
    fn connect_clique<C>(&mut self, nodes: C, label: Self::Label)
    where
        C: IntoIterator<Item = NodeIndex>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.try_add_edge(u, v, label);
            self.try_add_edge(v, u, label);
        }
    }
}

impl<G> GeneratorSubstructures for G where G: GraphEdgeEditing {}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: NodeIndex) -> UnweightedGraph<NodeIndex> {
        let mut g = UnweightedGraph::new();
        g.add_nodes(0..n).unwrap();
        g
    }

    #[test]
    fn test_connect_path() {
        {
            let mut g = graph(6);
            g.connect_path([], ());
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph(6);
            g.connect_path([1], ());
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph(6);
            g.connect_path([2, 1], ());
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(2, 1));
        }

        {
            let mut g = graph(6);
            g.connect_path([0, 3, 1, 4], ());
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = graph(6);
            g.connect_cycle([], ());
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph(6);
            g.connect_cycle([1], ());
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(1));
        }

        {
            let mut g = graph(6);
            g.connect_cycle([0, 3, 1, 4], ());
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = graph(6);
            g.connect_clique([], ());
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph(6);
            g.connect_clique([1], ());
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph(6);
            g.connect_clique([1, 2, 4, 2], ());
            assert_eq!(g.number_of_edges(), 6);
            assert!(!g.has_self_loop(2));
        }

        {
            let mut g = WeightedGraph::new();
            g.add_nodes(0..4u32).unwrap();
            g.connect_clique(0..4, 5);
            assert_eq!(g.number_of_edges(), 12);
            assert_eq!(g.all_weights(), vec![5; 12]);
        }
    }
}

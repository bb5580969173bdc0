/*!
# Cycles and Trees

Both cycle queries work on the strongly connected components of the graph, as every cycle lies
within a single component.

- [`CycleDetection::has_cycle`] counts every cycle, including self-loops and the two opposite
  edges of an undirected connection. It reports a cycle iff some node has a self-loop or some
  component has at least two nodes.
- [`CycleDetection::has_non_trivial_cycle`] ignores self-loops and symmetric pairs (two opposite
  edges with equal label). A component with at least two nodes contains such a cycle iff one of
  its edges is one-way, one of its 2-cycles carries different labels, or it connects at least as
  many distinct pairs of nodes as it has nodes.
*/

use super::*;

/// Returns *true* if a component of size `> 1` contains a cycle other than a self-loop or a
/// symmetric pair with equal labels
fn has_non_trivial_cycle_in_components<G>(graph: &G) -> bool
where
    G: GraphEdgeEditing,
{
    let components = StronglyConnectedComponents::new(graph)
        .filter(|scc| scc.len() > 1)
        .collect_vec();

    let mut component_of = vec![INVALID_NODE; graph.len()];
    for (i, scc) in components.iter().enumerate() {
        for &u in scc {
            component_of[u as usize] = i as NodeIndex;
        }
    }

    let mut pairs = vec![0usize; components.len()];
    for (u, v, label) in graph.index_edges() {
        let c = component_of[u as usize];
        if u == v || c == INVALID_NODE || component_of[v as usize] != c {
            continue;
        }

        if graph.label_of(v, u) != Some(label) {
            trace!("edge ({u}, {v}) lies on a non-trivial cycle");
            return true;
        }

        if u < v {
            pairs[c as usize] += 1;
        }
    }

    components
        .iter()
        .zip(pairs)
        .any(|(scc, num_pairs)| num_pairs >= scc.len())
}

/// Cycle and tree queries available on every graph
pub trait CycleDetection: GraphEdgeEditing {
    /// Returns *true* if the graph contains any directed cycle, including self-loops and the two
    /// edges of an undirected connection.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnweightedGraph::from_edges([1, 2, 3], [(1, 2), (2, 3)]).unwrap();
    /// assert!(!g.has_cycle());
    ///
    /// g.add_directed_edge((3, 1)).unwrap();
    /// assert!(g.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool {
        self.vertices().any(|u| self.label_of(u, u).is_some())
            || StronglyConnectedComponents::new(self).any(|scc| scc.len() > 1)
    }

    /// Like [`CycleDetection::has_cycle`] but self-loops and symmetric pairs `u <-> v` with
    /// equal labels do not count.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnweightedGraph::new();
    /// g.add_nodes([1, 2, 3]).unwrap();
    /// g.add_undirected_edges([(1, 2), (2, 3)]).unwrap();
    /// assert!(g.has_cycle());
    /// assert!(!g.has_non_trivial_cycle());
    ///
    /// g.add_undirected_edge((3, 1)).unwrap();
    /// assert!(g.has_non_trivial_cycle());
    /// ```
    fn has_non_trivial_cycle(&self) -> bool {
        has_non_trivial_cycle_in_components(self)
    }

    /// Returns *true* if the graph, with edge directions ignored, is a tree.
    ///
    /// The graph must be non-empty, weakly connected, free of self-loops and connect exactly
    /// `n - 1` distinct pairs of nodes. Either every pair is joined by a single directed edge or
    /// every pair by an undirected connection; mixing both is rejected.
    fn is_tree(&self) -> bool {
        let n = self.len();
        if n == 0 {
            return false;
        }

        let mut pairs = FxHashSet::default();
        for (u, v, _) in self.index_edges() {
            if u == v {
                return false;
            }
            pairs.insert((u.min(v), u.max(v)));
        }

        let m = self.number_of_edges() as usize;
        if pairs.len() != n - 1 || (m != pairs.len() && m != 2 * pairs.len()) {
            return false;
        }

        let undirected = AdjacencyView::undirected(self);
        ConnectedComponents::new(&undirected).nth(1).is_none()
    }
}

impl<G> CycleDetection for G where G: GraphEdgeEditing {}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph<const N: usize, const M: usize>(
        directed: [(u32, u32); N],
        undirected: [(u32, u32); M],
        n: u32,
    ) -> UnweightedGraph<u32> {
        let mut g = UnweightedGraph::new();
        g.add_nodes(1..=n).unwrap();
        g.add_directed_edges(directed).unwrap();
        g.add_undirected_edges(undirected).unwrap();
        g
    }

    #[test]
    fn cycles() {
        assert!(!graph([], [], 0).has_cycle());
        assert!(!graph([(1, 2), (1, 3), (2, 3)], [], 3).has_cycle());
        assert!(graph([(1, 2), (2, 3), (3, 1)], [], 3).has_cycle());
        assert!(graph([(2, 2)], [], 2).has_cycle());
        assert!(graph([], [(1, 2)], 2).has_cycle());
    }

    #[test]
    fn non_trivial_cycles() {
        assert!(!graph([(2, 2)], [], 2).has_non_trivial_cycle());
        assert!(!graph([], [(1, 2)], 2).has_non_trivial_cycle());
        assert!(!graph([], [(1, 2), (2, 3), (2, 4)], 4).has_non_trivial_cycle());
        assert!(graph([], [(1, 2), (2, 3), (3, 1)], 3).has_non_trivial_cycle());
        assert!(graph([(1, 2), (2, 3), (3, 1)], [], 3).has_non_trivial_cycle());
        assert!(graph([(4, 1)], [(1, 2), (2, 3), (3, 4)], 4).has_non_trivial_cycle());

        // the symmetric pair 1-2 also closes the cycle 1 -> 3 -> 2 -> 1
        assert!(graph([(1, 3), (3, 2)], [(1, 2)], 3).has_non_trivial_cycle());
        assert!(graph([(2, 3), (3, 1)], [(1, 2)], 3).has_non_trivial_cycle());
        assert!(!graph([(1, 3)], [(1, 2)], 3).has_non_trivial_cycle());
        assert!(!graph([(2, 2), (3, 3)], [(1, 2), (2, 3)], 3).has_non_trivial_cycle());
        assert!(graph([], [(1, 2), (2, 3), (3, 4), (4, 1)], 5).has_non_trivial_cycle());

        let mut g = WeightedGraph::new();
        g.add_nodes(["a", "b"]).unwrap();
        g.add_undirected_edge(("a", "b", 2)).unwrap();
        assert!(!g.has_non_trivial_cycle());

        g.add_directed_edge(("b", "a", 3)).unwrap();
        assert!(g.has_non_trivial_cycle());
    }

    #[test]
    fn trees() {
        assert!(!graph([], [], 0).is_tree());
        assert!(graph([], [], 1).is_tree());
        assert!(!graph([], [], 2).is_tree());
        assert!(graph([(1, 2)], [], 2).is_tree());
        assert!(graph([], [(1, 2)], 2).is_tree());
        assert!(!graph([], [(1, 2)], 3).is_tree());
        assert!(graph([], [(1, 2), (2, 3)], 3).is_tree());
        assert!(!graph([], [(1, 2), (2, 3), (3, 1)], 3).is_tree());
        assert!(!graph([], [(1, 2), (2, 3)], 4).is_tree());
        assert!(graph([], [(1, 2), (1, 3), (1, 4)], 4).is_tree());
        assert!(!graph([], [(1, 2), (2, 3), (3, 4), (2, 4)], 4).is_tree());
        assert!(graph([(1, 2), (1, 3), (1, 4)], [], 4).is_tree());
        assert!(!graph([(1, 2), (1, 3), (3, 1), (1, 4)], [], 4).is_tree());
        assert!(!graph([(1, 2), (1, 3), (1, 4), (3, 4)], [], 4).is_tree());
        assert!(!graph([(1, 1)], [], 1).is_tree());

        let sub_trees = [(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (2, 7), (3, 8), (4, 9), (4, 10)];
        assert!(graph([], sub_trees, 10).is_tree());

        let mut g = graph([], sub_trees, 10);
        g.add_undirected_edge((5, 10)).unwrap();
        assert!(!g.is_tree());
    }
}

use std::{iter::Copied, slice::Iter};

use crate::ops::*;

use super::*;

/// A read-only, index-level snapshot of the adjacency of another graph.
///
/// Algorithms that need to walk edges backwards (or in both directions) build one of these once
/// instead of repeatedly scanning for in-neighbors.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyView {
    nbs: Vec<Vec<NodeIndex>>,
    num_edges: NumEdges,
}

impl AdjacencyView {
    /// Every edge `(u, v)` of `graph` becomes `(v, u)`
    pub fn transposed<G>(graph: &G) -> Self
    where
        G: AdjacencyList,
    {
        let mut nbs = vec![Vec::new(); graph.len()];
        let mut num_edges = 0;
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                nbs[v as usize].push(u);
                num_edges += 1;
            }
        }
        Self { nbs, num_edges }
    }

    /// Every edge `(u, v)` of `graph` is traversable in both directions.
    /// Neighbors are sorted and free of duplicates.
    pub fn undirected<G>(graph: &G) -> Self
    where
        G: AdjacencyList,
    {
        let mut nbs = vec![Vec::new(); graph.len()];
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                nbs[u as usize].push(v);
                nbs[v as usize].push(u);
            }
        }

        let mut num_edges = 0;
        for list in nbs.iter_mut() {
            list.sort_unstable();
            list.dedup();
            num_edges += list.len() as NumEdges;
        }
        Self { nbs, num_edges }
    }
}

impl GraphNodeOrder for AdjacencyView {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjacencyView {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjacencyView {
    type NeighborIter<'a>
        = Copied<Iter<'a, NodeIndex>>
    where
        Self: 'a;

    fn neighbors_of(&self, u: NodeIndex) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: NodeIndex) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjacencyView {
    fn has_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn views() {
        let g = UnweightedGraph::from_edges(0..4u32, [(0, 1), (1, 2), (2, 1), (3, 3)]).unwrap();

        let t = AdjacencyView::transposed(&g);
        assert_eq!(t.number_of_edges(), g.number_of_edges());
        assert_eq!(t.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(t.neighbors_of(0).collect_vec(), Vec::<NodeIndex>::new());
        assert!(t.has_self_loop(3));

        let u = AdjacencyView::undirected(&g);
        assert_eq!(u.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(u.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(u.neighbors_of(2).collect_vec(), vec![1]);
        assert_eq!(u.neighbors_of(3).collect_vec(), vec![3]);
        assert!(u.has_bidirected_edge(0, 1));
    }
}

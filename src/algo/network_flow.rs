/*!
# Maximum Flow

[`MaxFlow`] computes the value of a maximum `s-t` flow in a weighted graph whose edge weights are
interpreted as capacities. It implements the Edmonds–Karp variant of Ford–Fulkerson: augmenting
paths are found by BFS in a privately owned residual graph, so the input graph is never modified.

Only the total flow is reported; no per-edge assignment is exposed.
*/

use super::*;

/// Edmonds–Karp maximum flow on a residual copy of the graph.
///
/// # Examples
/// ```
/// use vgraphs::{prelude::*, algo::*};
///
/// let g = WeightedGraph::from_edges(
///     [0, 1, 2],
///     [(0, 1, 42), (1, 2, 20)],
/// ).unwrap();
///
/// assert_eq!(MaxFlow::new(&g).compute(0, 2), 20);
/// ```
pub struct MaxFlow<'a, G> {
    graph: &'a G,
}

impl<'a, G> MaxFlow<'a, G>
where
    G: WeightedAdjacency + GraphCopy,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Returns the value of a maximum flow from `source` to `sink`.
    /// The flow from a node to itself is 0.
    /// ** Panics if `source >= n || sink >= n` **
    pub fn compute(&self, source: NodeIndex, sink: NodeIndex) -> Weight {
        if source == sink {
            return 0;
        }

        let mut residual = self.residual_network();
        let mut parent = vec![INVALID_NODE; residual.len()];
        let mut total: Weight = 0;

        loop {
            parent.fill(INVALID_NODE);
            let mut bfs = residual.bfs_with_predecessor(source).stop_at(sink);
            bfs.parent_array_into(&mut parent);
            if !bfs.did_visit_node(sink) {
                break;
            }

            let path = augmenting_path(&parent, source, sink);
            let bottleneck = path
                .iter()
                .tuple_windows()
                .map(|(&u, &v)| residual.weight_of(u, v).unwrap_or(0))
                .min()
                .unwrap_or(0);
            debug_assert!(bottleneck > 0);
            if bottleneck == 0 {
                break;
            }

            trace!("augmenting path {path:?} with bottleneck {bottleneck}");

            for (&u, &v) in path.iter().tuple_windows() {
                let forward = residual.weight_of(u, v).unwrap_or(0) - bottleneck;
                if forward == 0 {
                    residual.try_remove_edge(u, v);
                } else {
                    residual.try_add_edge(u, v, forward);
                }

                let backward = residual
                    .weight_of(v, u)
                    .unwrap_or(0)
                    .saturating_add(bottleneck);
                residual.try_add_edge(v, u, backward);
            }

            total = total.saturating_add(bottleneck);
        }

        debug!("maximum flow from {source} to {sink} is {total}");
        total
    }

    /// Copy of the graph without edges of capacity 0
    fn residual_network(&self) -> G {
        let mut residual = self.graph.copy();
        let exhausted = residual
            .index_edges()
            .filter(|&(_, _, w)| w == 0)
            .map(|(u, v, _)| (u, v))
            .collect_vec();

        for (u, v) in exhausted {
            residual.try_remove_edge(u, v);
        }
        residual
    }
}

/// Follows the parent pointers from `sink` back to `source`
fn augmenting_path(parent: &[NodeIndex], source: NodeIndex, sink: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![sink];
    let mut node = sink;
    while node != source {
        node = parent[node as usize];
        debug_assert_ne!(node, INVALID_NODE);
        path.push(node);
    }
    path.reverse();
    path
}

/// Value-level access to [`MaxFlow`]
pub trait NetworkFlow: WeightedAdjacency + GraphCopy {
    /// Returns the value of a maximum flow from `source` to `sink` with edge weights as capacities.
    /// Fails with [`GraphError::NodeNotFound`] if either node is absent.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_nodes([0, 1]).unwrap();
    /// g.add_directed_edge((0, 1, 42)).unwrap();
    ///
    /// assert_eq!(g.compute_max_flow(&0, &1).unwrap(), 42);
    /// assert!(g.compute_max_flow(&0, &2).is_err());
    /// ```
    fn compute_max_flow(&self, source: &Self::Value, sink: &Self::Value) -> Result<Weight> {
        let s = self.try_index_of(source)?;
        let t = self.try_index_of(sink)?;
        Ok(MaxFlow::new(self).compute(s, t))
    }
}

impl<G> NetworkFlow for G where G: WeightedAdjacency + GraphCopy {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::init_logger};

    fn flow_network(n: u32, edges: &[(u32, u32, Weight)]) -> WeightedGraph<u32> {
        WeightedGraph::from_edges(0..n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn trivial_networks() {
        init_logger();

        let g = flow_network(2, &[(0, 1, 42)]);
        assert_eq!(g.compute_max_flow(&0, &1).unwrap(), 42);
        assert_eq!(g.compute_max_flow(&1, &0).unwrap(), 0);
        assert_eq!(g.compute_max_flow(&0, &0).unwrap(), 0);

        let g = flow_network(2, &[(0, 1, 42), (1, 0, 3)]);
        assert_eq!(g.compute_max_flow(&0, &1).unwrap(), 42);

        let g = flow_network(3, &[(0, 1, 42), (1, 2, 20)]);
        assert_eq!(g.compute_max_flow(&0, &2).unwrap(), 20);

        let g = flow_network(3, &[(0, 1, 0), (1, 2, 20)]);
        assert_eq!(g.compute_max_flow(&0, &2).unwrap(), 0);
    }

    #[test]
    fn missing_terminals() {
        let g = flow_network(2, &[(0, 1, 1)]);
        assert_eq!(
            g.compute_max_flow(&0, &7),
            Err(GraphError::NodeNotFound("7".into()))
        );
        assert!(g.compute_max_flow(&9, &1).is_err());
    }

    #[test]
    fn textbook_networks() {
        init_logger();

        let g = flow_network(4, &[(0, 1, 10), (0, 2, 5), (1, 2, 15), (1, 3, 5), (2, 3, 10)]);
        assert_eq!(g.compute_max_flow(&0, &3).unwrap(), 15);

        let g = flow_network(
            6,
            &[
                (0, 1, 16),
                (0, 2, 13),
                (1, 2, 10),
                (1, 3, 12),
                (2, 1, 4),
                (2, 4, 14),
                (3, 2, 9),
                (3, 5, 20),
                (4, 3, 7),
                (4, 5, 4),
            ],
        );
        assert_eq!(g.compute_max_flow(&0, &5).unwrap(), 23);

        // the edge 3 -> 4 only becomes usable through the residual of 4 -> 3
        let g = flow_network(
            6,
            &[
                (0, 1, 4),
                (0, 4, 2),
                (1, 2, 4),
                (1, 3, 2),
                (2, 5, 3),
                (3, 2, 1),
                (3, 5, 1),
                (4, 3, 1),
                (4, 5, 3),
            ],
        );
        assert_eq!(g.compute_max_flow(&0, &5).unwrap(), 6);
    }

    #[test]
    fn unbounded_capacities() {
        let inf = i32::MAX as i64;
        let matrix = AdjacencyMatrix::new(vec![
            vec![0, 0, 4, 6, 0, 0, 0, 0],
            vec![0, 0, 5, 2, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 4, 4, 0, 0],
            vec![0, 0, 0, 0, 6, 6, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, inf],
            vec![0, 0, 0, 0, 0, 0, 0, inf],
            vec![inf, inf, 0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap();

        let g = matrix.connect_except(0).unwrap();
        assert_eq!(g.compute_max_flow(&6, &7).unwrap(), 16);
    }

    #[test]
    fn input_is_not_modified() {
        let g = flow_network(4, &[(0, 1, 10), (0, 2, 5), (1, 2, 15), (1, 3, 5), (2, 3, 10)]);
        let before = g.copy();
        assert_eq!(MaxFlow::new(&g).compute(0, 3), 15);
        assert_eq!(g, before);
    }

    #[test]
    fn bounded_by_cuts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4711);

        for _ in 0..20 {
            let g = WeightedGraph::gnp_weighted(rng, 30, 0.15, 1..25);
            let flow = MaxFlow::new(&g).compute(0, 29);

            let out_of_source: Weight = g.labelled_neighbors_of(0).map(|(_, w)| w).sum();
            let into_sink: Weight = g
                .index_edges()
                .filter(|&(_, v, _)| v == 29)
                .map(|(_, _, w)| w)
                .sum();

            assert!(flow >= 0);
            assert!(flow <= out_of_source);
            assert!(flow <= into_sink);
            assert_eq!(
                flow > 0,
                g.bfs_path_with::<NodeBitSet, Vec<NodeIndex>>(0, 29).is_some()
            );
        }
    }
}

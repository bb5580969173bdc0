/*!
# Shortest Paths

[`Dijkstra`] computes paths of minimum total weight from a source to a target. Labels are turned
into costs by [`EdgeLabel::as_weight`], so unweighted graphs count hops. Two frontiers are
available:

- [`Frontier::Scan`] selects the next node by scanning all unsettled nodes (`O(n^2)`),
- [`Frontier::MinQueue`] keeps a binary heap. Instead of a decrease-key operation, an improved
  node is pushed again and stale heap entries are skipped when popped (`O((n + m) log n)`).

Both frontiers settle nodes in non-decreasing distance and therefore return paths of equal total
weight; on ties the chosen node sequence may differ.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// How [`Dijkstra`] picks the next node to settle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frontier {
    /// Linear scan over all unsettled nodes
    #[default]
    Scan,
    /// Binary heap with lazy deletion
    MinQueue,
}

/// Dijkstra's algorithm on non-negative edge costs
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    frontier: Frontier,
}

/// Scratch state of a single run
struct Search {
    dist: Vec<Weight>,
    parent: Vec<NodeIndex>,
    settled: NodeBitSet,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: GraphEdgeEditing,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            frontier: Frontier::default(),
        }
    }

    /// Sets the frontier used by subsequent runs
    pub fn set_frontier(&mut self, frontier: Frontier) {
        self.frontier = frontier;
    }

    /// Chainable version of [`Dijkstra::set_frontier`]
    pub fn frontier(mut self, frontier: Frontier) -> Self {
        self.set_frontier(frontier);
        self
    }

    /// Returns a cheapest path `[from, ..., to]`, `[from]` if both are equal, or `None` if `to`
    /// cannot be reached.
    /// ** Panics if `from >= n || to >= n` **
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_edges(
    ///     [0, 1, 2],
    ///     [(0, 1, 5), (1, 2, 1), (0, 2, 9)],
    /// ).unwrap();
    ///
    /// let dijkstra = Dijkstra::new(&g).frontier(Frontier::MinQueue);
    /// assert_eq!(dijkstra.path(0, 2), Some(vec![0, 1, 2]));
    /// assert_eq!(dijkstra.path(2, 0), None);
    /// ```
    pub fn path(&self, from: NodeIndex, to: NodeIndex) -> Option<Vec<NodeIndex>> {
        let n = self.graph.len();
        assert!((to as usize) < n, "node index {to} out of range");

        let mut search = Search {
            dist: vec![WEIGHT_INFINITY; n],
            parent: vec![INVALID_NODE; n],
            settled: NodeBitSet::new(n as NumNodes),
        };
        search.dist[from as usize] = 0;

        match self.frontier {
            Frontier::Scan => self.run_scan(&mut search, to),
            Frontier::MinQueue => self.run_min_queue(&mut search, from, to),
        }

        if search.dist[to as usize] == WEIGHT_INFINITY {
            return None;
        }

        let mut path = vec![to];
        let mut node = to;
        while node != from {
            node = search.parent[node as usize];
            debug_assert_ne!(node, INVALID_NODE);
            path.push(node);
        }
        path.reverse();

        trace!(
            "cheapest path {from} -> {to} costs {}",
            search.dist[to as usize]
        );
        Some(path)
    }

    fn run_scan(&self, search: &mut Search, to: NodeIndex) {
        loop {
            let next = self
                .graph
                .vertices()
                .filter(|u| {
                    !search.settled.get_bit(*u) && search.dist[*u as usize] != WEIGHT_INFINITY
                })
                .min_by_key(|&u| search.dist[u as usize]);

            let Some(u) = next else {
                return;
            };

            search.settled.set_bit(u);
            if u == to {
                return;
            }
            self.relax(search, u, |_, _| {});
        }
    }

    fn run_min_queue(&self, search: &mut Search, from: NodeIndex, to: NodeIndex) {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > search.dist[u as usize] || search.settled.set_bit(u) {
                continue; // stale entry
            }

            if u == to {
                return;
            }
            self.relax(search, u, |v, dv| heap.push(Reverse((dv, v))));
        }
    }

    /// Improves the tentative distances of all unsettled out-neighbors of the settled node `u`
    /// and reports every improvement to `improved`
    fn relax<F>(&self, search: &mut Search, u: NodeIndex, mut improved: F)
    where
        F: FnMut(NodeIndex, Weight),
    {
        let du = search.dist[u as usize];
        trace!("settled node {u} at distance {du}");

        for (v, label) in self.graph.labelled_neighbors_of(u) {
            if search.settled.get_bit(v) {
                continue;
            }

            let dv = du.saturating_add(label.as_weight());
            if dv < search.dist[v as usize] {
                search.dist[v as usize] = dv;
                search.parent[v as usize] = u;
                improved(v, dv);
            }
        }
    }
}

/// Provides the cheapest path between two nodes. Unweighted graphs minimize the number of edges
/// (BFS), weighted graphs the total weight (Dijkstra with [`Frontier::Scan`]).
pub trait ShortestPath: NodeLookup {
    /// Returns `[from, ..., to]`, `[from]` if both are equal, or an empty path if `to` cannot be
    /// reached. Fails with [`GraphError::NodeNotFound`] if either node is absent.
    fn shortest_path(&self, from: &Self::Value, to: &Self::Value) -> Result<Vec<Self::Value>>;
}

impl<T> ShortestPath for UnweightedGraph<T>
where
    T: NodeValue,
{
    fn shortest_path(&self, from: &T, to: &T) -> Result<Vec<T>> {
        self.bfs_path(from, to)
    }
}

impl<T> ShortestPath for WeightedGraph<T>
where
    T: NodeValue,
{
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_nodes(["Cori", "Enno", "Max"]).unwrap();
    /// g.add_undirected_edges([("Cori", "Enno", 1), ("Enno", "Max", 2), ("Cori", "Max", 10)])
    ///     .unwrap();
    ///
    /// assert_eq!(g.shortest_path(&"Cori", &"Max").unwrap(), vec!["Cori", "Enno", "Max"]);
    /// ```
    fn shortest_path(&self, from: &T, to: &T) -> Result<Vec<T>> {
        cheapest_path(self, from, to, Frontier::Scan)
    }
}

fn cheapest_path<G>(
    graph: &G,
    from: &G::Value,
    to: &G::Value,
    frontier: Frontier,
) -> Result<Vec<G::Value>>
where
    G: GraphEdgeEditing,
{
    let u = graph.try_index_of(from)?;
    let v = graph.try_index_of(to)?;

    Ok(Dijkstra::new(graph)
        .frontier(frontier)
        .path(u, v)
        .map(|path| graph.values_of(path))
        .unwrap_or_default())
}

/// Weighted-only path queries
pub trait WeightedShortestPath: WeightedAdjacency {
    /// Same contract as [`ShortestPath::shortest_path`] but runs Dijkstra with
    /// [`Frontier::MinQueue`].
    fn shortest_path_using_min_queue(
        &self,
        from: &Self::Value,
        to: &Self::Value,
    ) -> Result<Vec<Self::Value>> {
        cheapest_path(self, from, to, Frontier::MinQueue)
    }

    /// Returns the total weight along `path` or `None` if two consecutive nodes are not
    /// connected. The empty and single-node paths weigh `0`.
    fn path_weight(&self, path: &[Self::Value]) -> Result<Option<Weight>> {
        let mut total: Weight = 0;
        for (from, to) in path.iter().tuple_windows() {
            match self.weight(from, to)? {
                Some(w) => total = total.saturating_add(w),
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }
}

impl<G> WeightedShortestPath for G where G: WeightedAdjacency {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::RandomGraph;

    fn friends() -> WeightedGraph<&'static str> {
        let mut g = WeightedGraph::new();
        g.add_nodes(["Cori", "Enno", "Max", "Moritz", "Niclas", "Buggi"])
            .unwrap();
        g
    }

    fn both_frontiers(
        g: &WeightedGraph<&'static str>,
        from: &'static str,
        to: &'static str,
    ) -> Vec<&'static str> {
        let scan = g.shortest_path(&from, &to).unwrap();
        let queue = g.shortest_path_using_min_queue(&from, &to).unwrap();
        assert_eq!(scan, queue);
        scan
    }

    #[test]
    fn trivial_paths() {
        let mut g = friends();
        assert_eq!(both_frontiers(&g, "Enno", "Enno"), vec!["Enno"]);
        assert!(both_frontiers(&g, "Enno", "Cori").is_empty());
        assert!(g.shortest_path(&"Enno", &"Jonas").is_err());
        assert!(g.shortest_path_using_min_queue(&"Jonas", &"Enno").is_err());

        g.add_directed_edge(("Enno", "Cori", 1000)).unwrap();
        assert_eq!(both_frontiers(&g, "Enno", "Cori"), vec!["Enno", "Cori"]);
        assert!(both_frontiers(&g, "Cori", "Enno").is_empty());
    }

    #[test]
    fn same_weights_prefer_fewer_nodes() {
        let mut g = friends();
        g.add_undirected_edges([
            ("Cori", "Enno", 1),
            ("Enno", "Niclas", 1),
            ("Niclas", "Moritz", 1),
            ("Moritz", "Max", 1),
            ("Cori", "Buggi", 1),
            ("Buggi", "Moritz", 1),
        ])
        .unwrap();

        assert_eq!(
            both_frontiers(&g, "Cori", "Max"),
            vec!["Cori", "Buggi", "Moritz", "Max"]
        );
    }

    #[test]
    fn higher_weights_on_path_with_less_nodes() {
        let mut g = friends();
        g.add_undirected_edges([
            ("Cori", "Enno", 1),
            ("Enno", "Niclas", 2),
            ("Niclas", "Moritz", 3),
            ("Moritz", "Max", 1),
            ("Cori", "Buggi", 3),
            ("Buggi", "Moritz", 4),
        ])
        .unwrap();

        let path = both_frontiers(&g, "Cori", "Max");
        assert_eq!(path, vec!["Cori", "Enno", "Niclas", "Moritz", "Max"]);
        assert_eq!(g.path_weight(&path).unwrap(), Some(7));
    }

    #[test]
    fn costly_direct_neighbor() {
        let mut g = friends();
        g.add_undirected_edges([
            ("Cori", "Enno", 1),
            ("Enno", "Niclas", 2),
            ("Niclas", "Moritz", 3),
            ("Moritz", "Max", 3),
            ("Cori", "Max", 10),
        ])
        .unwrap();

        assert_eq!(
            both_frontiers(&g, "Cori", "Max"),
            vec!["Cori", "Enno", "Niclas", "Moritz", "Max"]
        );
        assert_eq!(g.path_weight(&["Cori", "Max"]).unwrap(), Some(10));
        assert_eq!(g.path_weight(&["Max", "Buggi"]).unwrap(), None);
    }

    #[test]
    fn unweighted_shortest_path_counts_hops() {
        let mut g = UnweightedGraph::new();
        g.add_nodes(["A", "B", "C"]).unwrap();
        g.add_undirected_edge(("A", "B")).unwrap();

        assert!(g.shortest_path(&"A", &"C").unwrap().is_empty());
        assert_eq!(g.shortest_path(&"A", &"B").unwrap(), vec!["A", "B"]);

        let dijkstra = Dijkstra::new(&g).frontier(Frontier::MinQueue);
        assert_eq!(dijkstra.path(1, 0), Some(vec![1, 0]));
    }

    #[test]
    fn frontiers_agree_on_random_graphs() {
        crate::testing::init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..20 {
            let n = 40;
            let g = WeightedGraph::gnp_weighted(rng, n, 0.1, 0..20);

            for _ in 0..10 {
                let from = rng.random_range(0..n);
                let to = rng.random_range(0..n);

                let scan = g.shortest_path(&from, &to).unwrap();
                let queue = g.shortest_path_using_min_queue(&from, &to).unwrap();

                assert_eq!(scan.is_empty(), queue.is_empty());
                if !scan.is_empty() {
                    assert_eq!(scan.first(), Some(&from));
                    assert_eq!(scan.last(), Some(&to));
                    assert_eq!(g.path_weight(&scan).unwrap(), g.path_weight(&queue).unwrap());
                }

                let hops = g.bfs_path(&from, &to).unwrap();
                assert_eq!(hops.is_empty(), scan.is_empty());
            }
        }
    }
}

/*!
# Clique Enumeration

[`CliqueSearch`] enumerates all cliques that contain a given node by growing them level by
level: starting from the singleton, every clique is extended by each node adjacent to all of its
members. Each clique is reported exactly once, independent of the order in which its members were
added.

The number of cliques can be exponential in the size of the largest clique (a complete graph on
`k` nodes has `2^(k-1)` cliques through every node). [`CliqueSearch::max_size`] bounds the
enumeration.
*/

use std::collections::VecDeque;

use super::*;

/// Level-wise enumeration of the cliques through a node.
/// Adjacency follows out-edges: `w` extends a clique if every member has an edge to `w`.
pub struct CliqueSearch<'a, G> {
    graph: &'a G,
    max_size: Option<NumNodes>,
}

impl<'a, G> CliqueSearch<'a, G>
where
    G: AdjacencyList + AdjacencyTest,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            max_size: None,
        }
    }

    /// Only enumerate cliques with at most `k` nodes. `None` removes the bound.
    pub fn set_max_size(&mut self, k: Option<NumNodes>) {
        self.max_size = k;
    }

    /// Chainable version of [`CliqueSearch::set_max_size`]
    pub fn max_size(mut self, k: NumNodes) -> Self {
        self.set_max_size(Some(k));
        self
    }

    /// Returns all cliques containing `u`, each sorted increasingly. Cliques are ordered by size
    /// and then lexicographically.
    /// ** Panics if `u >= n` **
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnweightedGraph::new();
    /// g.add_nodes([0, 1, 2, 3]).unwrap();
    /// g.add_undirected_edges([(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
    ///
    /// assert_eq!(
    ///     CliqueSearch::new(&g).cliques_containing(0),
    ///     vec![vec![0], vec![0, 1], vec![0, 2], vec![0, 1, 2]]
    /// );
    /// assert_eq!(
    ///     CliqueSearch::new(&g).max_size(2).cliques_containing(2),
    ///     vec![vec![2], vec![0, 2], vec![1, 2], vec![2, 3]]
    /// );
    /// ```
    pub fn cliques_containing(&self, u: NodeIndex) -> Vec<Vec<NodeIndex>> {
        assert!(u < self.graph.number_of_nodes(), "node index {u} out of range");

        let mut found: FxHashSet<Vec<NodeIndex>> = FxHashSet::default();
        let mut queue = VecDeque::from([vec![u]]);
        found.insert(vec![u]);

        while let Some(clique) = queue.pop_front() {
            if self
                .max_size
                .is_some_and(|k| clique.len() >= k as usize)
            {
                continue;
            }

            for w in self.common_neighbors(&clique) {
                let mut larger = clique.clone();
                let pos = larger.partition_point(|&x| x < w);
                larger.insert(pos, w);

                if found.insert(larger.clone()) {
                    queue.push_back(larger);
                }
            }
        }

        let mut cliques = found.into_iter().collect_vec();
        cliques.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        trace!("found {} cliques containing node {u}", cliques.len());
        cliques
    }

    /// Nodes outside of `clique` that every member has an edge to
    fn common_neighbors<'b>(
        &'b self,
        clique: &'b [NodeIndex],
    ) -> impl Iterator<Item = NodeIndex> + 'b {
        self.graph
            .neighbors_of(clique[0])
            .filter(move |w| clique.binary_search(w).is_err())
            .filter(move |&w| clique[1..].iter().all(|&m| self.graph.has_edge(m, w)))
    }
}

/// Value-level access to [`CliqueSearch`]
pub trait CliqueEnumeration: NodeLookup + AdjacencyList + AdjacencyTest {
    /// Returns all cliques that contain `value`, the singleton `[value]` included.
    /// Members are listed in node insertion order; cliques are ordered by size.
    /// An absent node yields no cliques.
    ///
    /// On directed graphs a clique grows only along out-edges of `value`, so the reported
    /// cliques depend on the start node: for `0 -> 1, 0 -> 2, 1 -> 2` node `0` reports
    /// `[0, 1, 2]` while node `1` only reports `[1, 2]`. On undirected graphs every clique is
    /// reported from each of its members.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnweightedGraph::new();
    /// g.add_nodes(["Enno", "Cori", "Max"]).unwrap();
    /// g.add_undirected_edge(("Enno", "Cori")).unwrap();
    ///
    /// assert_eq!(
    ///     g.find_all_cliques(&"Cori"),
    ///     vec![vec!["Cori"], vec!["Enno", "Cori"]]
    /// );
    /// assert_eq!(g.find_all_cliques(&"Max"), vec![vec!["Max"]]);
    /// assert!(g.find_all_cliques(&"Jonas").is_empty());
    /// ```
    fn find_all_cliques(&self, value: &Self::Value) -> Vec<Vec<Self::Value>> {
        let Some(u) = self.index_of(value) else {
            return Vec::new();
        };

        CliqueSearch::new(self)
            .cliques_containing(u)
            .into_iter()
            .map(|clique| self.values_of(clique))
            .collect()
    }
}

impl<G> CliqueEnumeration for G where G: NodeLookup + AdjacencyList + AdjacencyTest {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    fn sorted<T: Ord>(mut cliques: Vec<Vec<T>>) -> Vec<Vec<T>> {
        cliques.iter_mut().for_each(|c| c.sort());
        cliques.sort();
        cliques
    }

    #[test]
    fn small_graphs() {
        let empty: UnweightedGraph<&str> = UnweightedGraph::new();
        assert!(empty.find_all_cliques(&"Enno").is_empty());

        let mut g = UnweightedGraph::new();
        g.add_nodes(["Enno", "Cori", "Max"]).unwrap();
        assert_eq!(g.find_all_cliques(&"Enno"), vec![vec!["Enno"]]);

        g.add_undirected_edge(("Enno", "Cori")).unwrap();
        assert_eq!(
            g.find_all_cliques(&"Enno"),
            vec![vec!["Enno"], vec!["Enno", "Cori"]]
        );
        assert_eq!(g.find_all_cliques(&"Max"), vec![vec!["Max"]]);

        g.add_undirected_edge(("Enno", "Max")).unwrap();
        assert_eq!(
            sorted(g.find_all_cliques(&"Cori")),
            sorted(vec![vec!["Cori"], vec!["Cori", "Enno"]])
        );
        assert_eq!(
            sorted(g.find_all_cliques(&"Enno")),
            sorted(vec![vec!["Enno"], vec!["Enno", "Cori"], vec!["Enno", "Max"]])
        );

        g.add_undirected_edge(("Cori", "Max")).unwrap();
        for node in ["Enno", "Cori", "Max"] {
            let cliques = g.find_all_cliques(&node);
            assert_eq!(cliques.len(), 4);
            assert!(cliques.iter().all(|c| c.contains(&node)));
            assert_eq!(cliques[3], vec!["Enno", "Cori", "Max"]);
        }
    }

    #[test]
    fn cliques_follow_out_edges() {
        let mut g = UnweightedGraph::new();
        g.add_nodes([0, 1, 2]).unwrap();
        g.add_directed_edges([(0, 1), (0, 2), (1, 2)]).unwrap();

        assert_eq!(
            g.find_all_cliques(&0),
            vec![vec![0], vec![0, 1], vec![0, 2], vec![0, 1, 2]]
        );
        assert_eq!(g.find_all_cliques(&1), vec![vec![1], vec![1, 2]]);
        assert_eq!(g.find_all_cliques(&2), vec![vec![2]]);
    }

    #[test]
    fn complete_graph() {
        let n: NodeIndex = 6;
        let mut g = UnweightedGraph::new();
        g.add_nodes(0..n).unwrap();
        g.connect_clique(0..n, ());

        let cliques = CliqueSearch::new(&g).cliques_containing(3);
        assert_eq!(cliques.len(), 1 << (n - 1));
        assert!(cliques.iter().all(|c| c.binary_search(&3).is_ok()));
        assert!(cliques.windows(2).all(|w| w[0].len() <= w[1].len()));

        let bounded = CliqueSearch::new(&g).max_size(3).cliques_containing(3);
        assert_eq!(bounded.len(), 1 + 5 + 10);
        assert!(bounded.iter().all(|c| c.len() <= 3));
    }

    #[test]
    fn weighted_graphs() {
        let mut g = WeightedGraph::new();
        g.add_nodes(['a', 'b', 'c', 'd']).unwrap();
        g.add_undirected_edges([('a', 'b', 1), ('b', 'c', 2), ('c', 'a', 3), ('c', 'd', 4)])
            .unwrap();

        assert_eq!(
            g.find_all_cliques(&'c'),
            vec![
                vec!['c'],
                vec!['a', 'c'],
                vec!['b', 'c'],
                vec!['c', 'd'],
                vec!['a', 'b', 'c']
            ]
        );
    }
}

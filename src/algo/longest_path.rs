/*!
# Longest Paths by Weight Inversion

[`LongestPathComputer`] takes the largest weight of a graph as optimum and builds an *inverted*
graph in which every edge weighs `max_weight - weight`. Edges that were expensive become cheap
and vice versa, so a cheapest path in the inverted graph is reported as longest path.

This is a heuristic. It only coincides with a true longest path if the graph is free of the
distortions the inversion introduces, most notably on graphs with cycles: paths with more edges
collect more (now non-negative) inverted weight and are thus penalized.
*/

use super::*;

/// Caches the inverted graph of a weighted graph to answer longest path queries
#[derive(Debug, Clone)]
pub struct LongestPathComputer<T>
where
    T: NodeValue,
{
    inverted: WeightedGraph<T>,
}

impl<T> LongestPathComputer<T>
where
    T: NodeValue,
{
    /// Builds the inverted graph.
    /// Fails with [`GraphError::EmptyInput`] if the graph has no edges.
    pub fn new(graph: &WeightedGraph<T>) -> Result<Self> {
        let max_weight = graph.max_weight().ok_or(GraphError::EmptyInput(
            "longest paths require at least one edge",
        ))?;
        debug!(
            "inverting {} edges against maximum weight {max_weight}",
            graph.number_of_edges()
        );

        let mut inverted = graph.copy_without_edges();
        for (u, v, w) in graph.index_edges() {
            inverted.try_add_edge(u, v, max_weight - w);
        }

        Ok(Self { inverted })
    }

    /// Returns the cheapest path `[from, ..., to]` of the inverted graph, `[from]` if both are
    /// equal, or an empty path if `to` cannot be reached.
    /// Fails with [`GraphError::NodeNotFound`] if either node is absent.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_nodes(["Cori", "Enno", "Max"]).unwrap();
    /// g.add_undirected_edges([("Cori", "Enno", 4), ("Enno", "Max", 4), ("Cori", "Max", 1)])
    ///     .unwrap();
    ///
    /// let computer = LongestPathComputer::new(&g).unwrap();
    /// assert_eq!(computer.longest_path(&"Cori", &"Max").unwrap(), vec!["Cori", "Enno", "Max"]);
    /// ```
    pub fn longest_path(&self, from: &T, to: &T) -> Result<Vec<T>> {
        self.inverted.shortest_path(from, to)
    }

    /// The graph in which every weight `w` was replaced by `max_weight - w`
    pub fn inverted_graph(&self) -> &WeightedGraph<T> {
        &self.inverted
    }
}

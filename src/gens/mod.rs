/*!
# Graph Generators

This module provides builders for random graphs and converters from common grid-like inputs.

Random generators allow parameterized control over structural properties of the graph and can
produce either a complete collection of edges or a stream of them through iterators. The typical
usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into constructors of whole graphs whose node values are their
indices `0..n`. The remaining modules build graphs from structured input:

- [`GeneratorSubstructures`]: paths, cycles and cliques inside existing graphs,
- [`AdjacencyMatrix`]: weighted graphs from square weight matrices,
- [`RectangularMaze`]: grid graphs over the free cells of a maze.
*/

use std::ops::Range;

use itertools::Itertools;
use rand::Rng;

use crate::{error::Result, prelude::*, utils::Probability};

mod matrix;
mod maze;
mod substructures;

pub use matrix::*;
pub use maze::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges between node indices.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<(NodeIndex, NodeIndex)>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (NodeIndex, NodeIndex)>
    where
        R: Rng;
}

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs generate every possible directed edge (self-loops included) in a graph with
/// `n` nodes with probability `p` independent from each other.
///
/// # Example
/// ```
/// use vgraphs::gens::*;
///
/// let mut rng = rand::rng();
/// assert!(Gnp::new().nodes(10).prob(0.0).generate(&mut rng).is_empty());
/// assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(&mut rng).len(), 100);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges in lexicographic order
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (NodeIndex, NodeIndex)>
    where
        R: Rng,
    {
        let n = self.n;
        let p = self.probability();

        (0..n)
            .cartesian_product(0..n)
            .filter(move |_| rng.random_bool(p))
    }
}

/// Trait for building full graph instances from common random models.
/// Node values are the node indices `0..n`.
pub trait RandomGraph: GraphNew + GraphNodeEditing<Value = NodeIndex> + GraphEdgeEditing {
    /// Creates a graph with nodes `0..n` and the given (unlabelled) edges
    fn from_index_edges<I>(n: NumNodes, edges: I, label: Self::Label) -> Self
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex)>,
    {
        let mut graph = Self::with_capacity(n);
        for u in 0..n {
            graph.try_add_node(u);
        }
        for (u, v) in edges {
            graph.try_add_edge(u, v, label);
        }
        graph
    }

    /// Creates a random `G(n,p)` graph using edge probability `p`.
    /// Edges carry the default label of the graph.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_index_edges(
            n,
            Gnp::new().nodes(n).prob(p).stream(rng),
            <Self::Label as EdgeLabel>::unit(),
        )
    }

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_index_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|(u, v)| u != v),
            <Self::Label as EdgeLabel>::unit(),
        )
    }

    /// Creates a `G(n,p)` graph without self-loops whose weights are drawn uniformly from
    /// `weights`.
    /// ** Panics if `weights` is empty or contains negative weights **
    ///
    /// # Example
    /// ```
    /// use vgraphs::{prelude::*, gens::*};
    ///
    /// let mut rng = rand::rng();
    /// let g = WeightedGraph::gnp_weighted(&mut rng, 20, 0.3, 1..10);
    /// assert!(g.all_weights().into_iter().all(|w| (1..10).contains(&w)));
    /// ```
    fn gnp_weighted<R>(rng: &mut R, n: NumNodes, p: f64, weights: Range<Weight>) -> Self
    where
        R: Rng,
        Self: GraphEdgeEditing<Label = Weight>,
    {
        assert!(
            !weights.is_empty() && weights.start >= 0,
            "invalid weight range {weights:?}"
        );

        let edges = Gnp::new()
            .nodes(n)
            .prob(p)
            .generate(rng)
            .into_iter()
            .filter(|(u, v)| u != v)
            .collect_vec();

        let mut graph = Self::from_index_edges(n, [], 0);
        for (u, v) in edges {
            graph.try_add_edge(u, v, rng.random_range(weights.clone()));
        }
        graph
    }
}

impl<G> RandomGraph for G where
    G: GraphNew + GraphNodeEditing<Value = NodeIndex> + GraphEdgeEditing
{
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn gnp_bounds() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        let g = UnweightedGraph::gnp(rng, 50, 0.0);
        assert_eq!(g.len(), 50);
        assert!(g.is_edgeless());

        let g = UnweightedGraph::gnp(rng, 20, 1.0);
        assert_eq!(g.number_of_edges(), 400);

        let g = UnweightedGraph::gnp_no_loops(rng, 20, 1.0);
        assert_eq!(g.number_of_edges(), 380);
        assert!(g.vertices().all(|u| !g.has_self_loop(u)));
    }

    #[test]
    fn gnp_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1337);
        let n = 200;

        let g = UnweightedGraph::gnp(rng, n, 0.1);
        let m = g.number_of_edges() as f64;
        let expected = 0.1 * (n * n) as f64;
        assert!((m - expected).abs() < 0.1 * expected, "{m} vs {expected}");

        let edges = Gnp::new().nodes(n).avg_deg(5.0).generate(rng);
        let avg = edges.len() as f64 / n as f64;
        assert!((3.5..6.5).contains(&avg), "{avg}");
    }

    #[test]
    fn gnp_weighted_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        let g = WeightedGraph::gnp_weighted(rng, 30, 0.5, 3..4);
        assert!(!g.is_edgeless());
        assert!(g.all_weights().into_iter().all(|w| w == 3));
        assert_eq!(g.node_set(), (0..30).collect::<ValueSet<_>>());
    }

    #[test]
    #[should_panic]
    fn gnp_invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}

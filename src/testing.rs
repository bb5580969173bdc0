/// Instantiates the contract tests of the listed operation traits for a graph type whose node
/// values are `u32`. Random edges are drawn from a seeded [`rand_pcg::Pcg64Mcg`] and compared
/// against a plain reference set.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Graph = $graph;
            type Label = <Graph as GraphEdgeEditing>::Label;

            /// Creates a list of `m_ub` random index pairs for nodes `0..n`.
            /// Pairs may repeat and may be loops.
            fn random_edges<R: Rng>(
                rng: &mut R,
                n: NumNodes,
                m_ub: NumEdges,
            ) -> Vec<(NodeIndex, NodeIndex)> {
                (0..m_ub)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Graph on values `0..n` (which coincide with their indices) with random edges
            fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Graph {
                let mut graph = Graph::new();
                graph.add_nodes(0..n).unwrap();
                for (u, v) in random_edges(rng, n, m_ub) {
                    graph.try_add_edge(u, v, <Label as EdgeLabel>::unit());
                }
                graph
            }

            $(
                test_graph_ops!(@ $trait);
            )*
        }
    };
    (@ GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = Graph::new();
            assert!(graph.is_empty());
            assert!(graph.is_edgeless());

            let graph = Graph::with_capacity(10);
            assert_eq!(graph.number_of_nodes(), 0);
            assert_eq!(graph.vertices().collect_vec(), Vec::<NodeIndex>::new());
        }
    };
    (@ GraphNodeEditing) => {
        #[test]
        fn graph_node_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for _ in 0..10 {
                let mut graph = Graph::new();
                let mut reference = FxHashSet::default();

                for _ in 0..100 {
                    let value: u32 = rng.random_range(0..50);
                    let was_present = !reference.insert(value);

                    assert_eq!(graph.add_node(value).is_err(), was_present);
                    assert_eq!(graph.len(), reference.len());
                    assert!(graph.contains(&value));
                }

                for (u, value) in graph.nodes().enumerate() {
                    assert_eq!(graph.index_of(value), Some(u as NodeIndex));
                }
                assert_eq!(graph.node_set(), reference);

                let n = graph.len();
                assert!(graph.add_nodes([100, 101, 100]).is_err());
                assert_eq!(graph.len(), n);
            }
        }
    };
    (@ GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    let mut graph = Graph::new();
                    graph.add_nodes(0..n).unwrap();

                    let mut reference = FxHashSet::default();
                    for (u, v) in random_edges(rng, n, m_ub) {
                        let existed = graph.try_add_edge(u, v, <Label as EdgeLabel>::unit());
                        assert_eq!(existed, !reference.insert((u, v)));
                    }

                    assert_eq!(graph.number_of_edges() as usize, reference.len());

                    let in_degs = graph.in_degrees();
                    for u in graph.vertices() {
                        for v in graph.vertices() {
                            assert_eq!(graph.has_edge(u, v), reference.contains(&(u, v)));
                        }
                        assert_eq!(
                            graph.degree_of(u) as usize,
                            reference.iter().filter(|(x, _)| *x == u).count()
                        );
                        assert_eq!(in_degs[u as usize], graph.in_degree_of(u));
                    }

                    let edges = reference.iter().copied().sorted().collect_vec();
                    for (u, v) in edges {
                        if rng.random_bool(0.5) {
                            assert!(graph.try_remove_edge(u, v));
                            assert!(!graph.try_remove_edge(u, v));
                            reference.remove(&(u, v));
                        }
                    }

                    assert_eq!(graph.number_of_edges() as usize, reference.len());
                    assert_eq!(
                        graph
                            .index_edges()
                            .map(|(u, v, _)| (u, v))
                            .collect::<FxHashSet<_>>(),
                        reference
                    );
                }
            }
        }
    };
    (@ GraphCopy) => {
        #[test]
        fn graph_copy() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 30] {
                for m_ub in [0, n, n * 4] {
                    let graph = random_graph(rng, n, m_ub);

                    let copy = graph.copy();
                    assert_eq!(copy, graph);
                    assert_eq!(copy.vertices().collect_vec(), graph.vertices().collect_vec());

                    let empty = graph.copy_without_edges();
                    assert!(empty.is_edgeless());
                    assert_eq!(empty.node_set(), graph.node_set());

                    let transposed = graph.transpose();
                    assert_eq!(transposed.number_of_edges(), graph.number_of_edges());
                    for (u, v, _) in graph.index_edges() {
                        assert!(transposed.has_edge(v, u));
                    }
                    assert_eq!(transposed.transpose(), graph);
                }
            }
        }
    };
    (@ GraphDirection) => {
        #[test]
        fn graph_direction() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [5 as NumNodes, 20] {
                let mut graph = Graph::new();
                graph.add_nodes(0..n).unwrap();
                assert!(graph.is_undirected());

                for (u, v) in random_edges(rng, n, n * 3) {
                    graph.try_add_edge(u, v, <Label as EdgeLabel>::unit());
                    graph.try_add_edge(v, u, <Label as EdgeLabel>::unit());
                }
                assert!(graph.is_undirected());
                assert!(!graph.is_directed());

                let (u, v, _) = graph.index_edges().find(|&(u, v, _)| u != v).unwrap();
                graph.try_remove_edge(v, u);
                assert!(graph.is_directed());
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Routes `log` output of the crate into the test harness; repeated calls are no-ops
#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

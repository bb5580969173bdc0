/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, BFS with predecessor tracking) on the index layer.
- Abstractions (`TraversalTree`, `RankFromOrder`) that turn traversals into parent arrays or
  rankings.
- Kahn's topological ordering.
- The [`Traversal`] trait exposing the index-level iterators directly on graphs, and the
  [`PathSearch`] trait exposing the value-level queries (`bfs_path`, `dfs_is_connected`,
  `find_all_connected`, `topological_sort`).
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Gives access to the graph an algorithm runs on
pub trait WithGraphRef<G> {
    /// Returns the graph being processed
    fn graph_ref(&self) -> &G;
}

/// Common interface for maintaining and querying visited-states
/// during a traversal.
///
/// Implementations wrap a [`Set<NodeIndex>`] that tracks which nodes
/// have already been discovered.
pub trait TraversalState<S>
where
    S: Set<NodeIndex>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: NodeIndex) -> bool {
        self.visited().contains(&u)
    }
}

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`NodeIndex`] stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: NodeIndex, item: NodeIndex) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: NodeIndex) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> NodeIndex;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<NodeIndex>;
}

impl SequencedItem for NodeIndex {
    fn new_with_predecessor(_: NodeIndex, item: NodeIndex) -> Self {
        item
    }
    fn new_without_predecessor(item: NodeIndex) -> Self {
        item
    }
    fn item(&self) -> NodeIndex {
        *self
    }
    fn predecessor(&self) -> Option<NodeIndex> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (NodeIndex, NodeIndex);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: NodeIndex, item: NodeIndex) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: NodeIndex) -> Self {
        (item, item)
    }
    fn item(&self) -> NodeIndex {
        self.1
    }
    fn predecessor(&self) -> Option<NodeIndex> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and the set of nodes
/// already discovered. A node is marked as soon as it is pushed, so no node is ever queued twice
/// even if it is reachable via several nodes of the current frontier.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<NodeIndex>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<NodeIndex>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<NodeIndex>, NodeIndex, NodeBitSet>;

/// A DFS traversal iterator over the graph. Nodes are yielded in stack order,
/// which differs from a recursive pre-order but reaches exactly the same nodes.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<NodeIndex>, NodeIndex, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<NodeIndex>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> TraversalState<V> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<NodeIndex>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<NodeIndex>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len() + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<NodeIndex> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` (once the first neighbors are requested) **
    pub fn new(graph: &'a G, start: NodeIndex) -> Self {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<NodeIndex>,
{
    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        let node = self.graph.vertices().find(|u| !self.visited.contains(u));
        match node {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: NodeIndex) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: NodeIndex) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: NodeIndex) {
        self.visited.insert(u);
    }

    /// Chainable version of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: NodeIndex) -> Self {
        self.exclude_node(u);
        self
    }
}

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = NodeIndex> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position at which node `u` was visited.
    ///
    /// Returns `None` if the iterator did not cover every node.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(["a", "b", "c"], [("c", "a"), ("a", "b")]).unwrap();
    ///
    /// let ranking = g.topo_search().ranking().unwrap();
    /// assert_eq!(ranking, vec![1, 2, 0]);
    /// ```
    fn ranking(mut self) -> Option<Vec<NodeIndex>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: NodeIndex = 0;

        for u in self.by_ref() {
            debug_assert_eq!(ranking[u as usize], INVALID_NODE);
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<'a, G, S, V> RankFromOrder<'a, G> for TraversalSearch<'a, G, S, NodeIndex, V>
where
    G: AdjacencyList,
    S: NodeSequencer<NodeIndex>,
    V: Set<NodeIndex>,
{
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    /// Entries of unvisited nodes (and of the root) remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [NodeIndex]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array where every node is initially its own parent
    /// and fills in the traversal tree using `parent_array_into`.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges([0, 1, 2], [(0, 1), (1, 2)]).unwrap();
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    fn parent_array(&mut self) -> Vec<NodeIndex> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<NodeIndex>,
{
}

/// Iterator implementing Kahn's topological ordering.
///
/// - Starts with all nodes of in-degree 0 in index order.
/// - Repeatedly dequeues a node (FIFO), decreasing the in-degrees of its successors in edge order,
///   and enqueues successors whose in-degree drops to 0.
/// - If the graph has a cycle, the nodes on (or behind) it are never yielded.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<NodeIndex>,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Computes all in-degrees and collects the initial set of zero in-degree nodes.
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let queue = in_degs
            .iter()
            .enumerate()
            .filter_map(|(i, d)| (*d == 0).then_some(i as NodeIndex))
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<'a, G> RankFromOrder<'a, G> for TopoSearch<'a, G> where G: AdjacencyList {}

/// Provides index-level traversal methods (BFS, DFS, topological order, ...)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges([7, 8], [(7, 8)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: NodeIndex) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: NodeIndex) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: NodeIndex) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Computes a path with the fewest edges from `start` to `end` using BFS.
    ///
    /// - Returns `Some(path)` with `path[0] == start` and `path.last() == end`.
    ///   `start == end` yields `[start]`.
    /// - Returns `None` if no path exists.
    ///
    /// `S` stores the visited markers and `M` the parent pointers.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    /// use fxhash::{FxHashMap, FxHashSet};
    ///
    /// let g = UnweightedGraph::from_edges([0, 1, 2], [(0, 1), (1, 2)]).unwrap();
    ///
    /// let path = g.bfs_path_with::<FxHashSet<NodeIndex>, FxHashMap<NodeIndex, NodeIndex>>(0, 2);
    /// assert_eq!(path, Some(vec![0, 1, 2]));
    /// ```
    fn bfs_path_with<S, M>(&self, start: NodeIndex, end: NodeIndex) -> Option<Vec<NodeIndex>>
    where
        S: Set<NodeIndex> + FromCapacity,
        M: Map<NodeIndex, NodeIndex> + FromCapacity,
    {
        if start == end {
            return Some(vec![start]);
        }

        let bfs =
            TraversalSearch::<'_, Self, VecDeque<PredecessorOfNode>, PredecessorOfNode, S>::new(
                self, start,
            )
            .stop_at(end);
        let len = self.len();
        let mut parent = M::from_total_used_capacity(len, len);

        for item in bfs {
            if let Some(p) = item.predecessor() {
                parent.insert(item.item(), p);
            }

            if item.item() == end {
                let mut path = vec![end];
                let mut node = end;
                while node != start {
                    node = *parent.get(&node)?;
                    path.push(node);
                }

                path.reverse();
                return Some(path);
            }
        }

        None
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

/// Value-level searches available on every graph
pub trait PathSearch: NodeLookup + AdjacencyList {
    /// Returns a path `[from, ..., to]` with the fewest edges, `[from]` if `from == to`, or an
    /// empty path if `to` cannot be reached. Both nodes must be part of the graph.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = UnweightedGraph::new();
    /// g.add_nodes(["A", "B", "C"]).unwrap();
    /// g.add_undirected_edge(("A", "B")).unwrap();
    ///
    /// assert_eq!(g.bfs_path(&"A", &"B").unwrap(), vec!["A", "B"]);
    /// assert!(g.bfs_path(&"A", &"C").unwrap().is_empty());
    /// assert!(g.bfs_path(&"A", &"D").is_err());
    /// ```
    fn bfs_path(&self, from: &Self::Value, to: &Self::Value) -> Result<Vec<Self::Value>> {
        let u = self.try_index_of(from)?;
        let v = self.try_index_of(to)?;

        Ok(self
            .bfs_path_with::<NodeBitSet, Vec<NodeIndex>>(u, v)
            .map(|path| self.values_of(path))
            .unwrap_or_default())
    }

    /// Returns *true* if there is a directed path from `from` to `to`; always *true* if both are
    /// equal. Fails if either node is absent.
    fn dfs_is_connected(&self, from: &Self::Value, to: &Self::Value) -> Result<bool> {
        let u = self.try_index_of(from)?;
        let v = self.try_index_of(to)?;

        Ok(u == v || self.dfs(u).any(|w| w == v))
    }

    /// Returns all nodes reachable from `value` (including itself).
    /// An absent node yields the empty set.
    fn find_all_connected(&self, value: &Self::Value) -> ValueSet<Self::Value> {
        match self.index_of(value) {
            Some(u) => self.bfs(u).map(|v| self.value_of(v).clone()).collect(),
            None => ValueSet::default(),
        }
    }

    /// Returns all nodes ordered such that every edge points from an earlier to a later node.
    ///
    /// Nodes without incoming edges are emitted in insertion order and released successors
    /// follow in edge insertion order (FIFO).
    ///
    /// Fails with [`GraphError::InvalidOperation`] if the graph is undirected (this includes
    /// graphs without edges) or if it contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(
    ///     ["Enno", "Cori", "Max"],
    ///     [("Cori", "Enno"), ("Enno", "Max")],
    /// ).unwrap();
    /// assert_eq!(g.topological_sort().unwrap(), vec!["Cori", "Enno", "Max"]);
    /// ```
    fn topological_sort(&self) -> Result<Vec<Self::Value>>
    where
        Self: GraphDirection,
    {
        if self.is_undirected() {
            debug!("topological sort requested on an undirected graph");
            return Err(GraphError::InvalidOperation(
                "topological sort requires a directed graph",
            ));
        }

        let order = self.topo_search().collect_vec();
        if order.len() < self.len() {
            debug!(
                "topological sort stopped after {} of {} nodes",
                order.len(),
                self.len()
            );
            return Err(GraphError::InvalidOperation(
                "the graph has cyclic dependencies",
            ));
        }

        Ok(self.values_of(order))
    }
}

impl<G> PathSearch for G where G: NodeLookup + AdjacencyList {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::init_logger;

    fn sample() -> UnweightedGraph<NodeIndex> {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        UnweightedGraph::from_edges(0..6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]).unwrap()
    }

    #[test]
    fn bfs_order() {
        let graph = sample();

        {
            let order: Vec<NodeIndex> = graph.bfs(1).collect();
            assert_eq!(order, vec![1, 2, 0, 4, 5, 3]);
        }

        {
            let order: Vec<NodeIndex> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn bfs_tree() {
        let graph = sample();
        let tree = graph.bfs_with_predecessor(1).parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 2, 0]);
    }

    #[test]
    fn dfs_reaches_same_nodes() {
        let graph = sample();
        let mut order: Vec<NodeIndex> = graph.dfs(1).collect();
        assert_eq!(order[0], 1);
        order.sort();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(graph.dfs(5).collect_vec(), vec![5, 4, 3]);
    }

    #[test]
    fn test_stopper_and_exclusion() {
        let graph = UnweightedGraph::from_edges(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
        assert_eq!(graph.bfs(0).with_node_excluded(2).collect_vec(), vec![0, 1]);

        let mut bfs = graph.bfs(2);
        assert_eq!(bfs.by_ref().count(), 2);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.next(), Some(0));
        assert_eq!(bfs.by_ref().count(), 1);
        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn shortest_hop_paths() {
        let graph = sample();
        assert_eq!(
            graph.bfs_path_with::<NodeBitSet, Vec<NodeIndex>>(1, 3),
            Some(vec![1, 2, 4, 3])
        );
        assert_eq!(graph.bfs_path_with::<NodeBitSet, Vec<NodeIndex>>(3, 1), None);
        assert_eq!(
            graph.bfs_path_with::<NodeBitSet, Vec<NodeIndex>>(4, 4),
            Some(vec![4])
        );
    }

    #[test]
    fn value_level_bfs_path() {
        let mut g = UnweightedGraph::new();
        g.add_nodes(["A", "B", "C", "D"]).unwrap();
        g.add_undirected_edges([("A", "B"), ("B", "C"), ("A", "D"), ("D", "C")])
            .unwrap();

        let path = g.bfs_path(&"A", &"C").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&"A"));
        assert_eq!(path.last(), Some(&"C"));

        assert_eq!(g.bfs_path(&"C", &"C").unwrap(), vec!["C"]);
        assert_eq!(
            g.bfs_path(&"X", &"C"),
            Err(GraphError::NodeNotFound("\"X\"".into()))
        );
    }

    #[test]
    fn dfs_connectivity() {
        let g = UnweightedGraph::from_edges(
            ["Enno", "Cori", "Max", "Jonas"],
            [("Enno", "Cori"), ("Cori", "Max")],
        )
        .unwrap();

        assert!(g.dfs_is_connected(&"Enno", &"Max").unwrap());
        assert!(!g.dfs_is_connected(&"Max", &"Enno").unwrap());
        assert!(!g.dfs_is_connected(&"Enno", &"Jonas").unwrap());
        assert!(g.dfs_is_connected(&"Jonas", &"Jonas").unwrap());
        assert!(g.dfs_is_connected(&"Jonas", &"Moritz").is_err());
    }

    #[test]
    fn find_all_connected() {
        let mut g = UnweightedGraph::new();
        g.add_nodes(["Enno", "Cori", "Moritz", "Niclas", "NotConnected"])
            .unwrap();
        g.add_undirected_edges([("Enno", "Cori"), ("Cori", "Moritz"), ("Moritz", "Niclas")])
            .unwrap();

        let component: ValueSet<_> = ["Enno", "Cori", "Moritz", "Niclas"].into_iter().collect();
        for v in &component {
            assert_eq!(g.find_all_connected(v), component);
        }
        assert_eq!(
            g.find_all_connected(&"NotConnected"),
            ["NotConnected"].into_iter().collect::<ValueSet<_>>()
        );
        assert!(g.find_all_connected(&"Unknown").is_empty());
    }

    #[test]
    fn topological_sort() {
        init_logger();

        let mut g = UnweightedGraph::new();
        g.add_nodes(["Enno", "Cori", "Max", "Jonas"]).unwrap();
        g.add_directed_edges([("Cori", "Enno"), ("Jonas", "Enno"), ("Enno", "Max")])
            .unwrap();
        assert_eq!(
            g.topological_sort().unwrap(),
            vec!["Cori", "Jonas", "Enno", "Max"]
        );

        g.add_directed_edge(("Max", "Cori")).unwrap();
        assert_eq!(
            g.topological_sort(),
            Err(GraphError::InvalidOperation(
                "the graph has cyclic dependencies"
            ))
        );

        let mut g = UnweightedGraph::new();
        g.add_nodes([1, 2]).unwrap();
        assert!(g.topological_sort().is_err());
        g.add_undirected_edge((1, 2)).unwrap();
        assert!(g.topological_sort().is_err());
    }

    #[test]
    fn topology_rank() {
        let mut graph =
            UnweightedGraph::from_edges(0..7, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)])
                .unwrap();

        {
            let ranks = graph.topo_search().ranking().unwrap();
            for (u, v, _) in graph.index_edges() {
                assert!(ranks[u as usize] < ranks[v as usize]);
            }
        }

        graph.add_directed_edge((6, 2)).unwrap(); // introduce cycle
        assert!(graph.topo_search().ranking().is_none());
    }

    #[test]
    fn weighted_topological_sort() {
        let g = WeightedGraph::from_edges(
            ["shirt", "tie", "jacket", "belt"],
            [("shirt", "tie", 2), ("tie", "jacket", 1), ("belt", "jacket", 7)],
        )
        .unwrap();

        let order = g.topological_sort().unwrap();
        let pos = |v: &str| order.iter().position(|w| *w == v).unwrap();
        for edge in g.edges() {
            assert!(pos(edge.0) < pos(edge.1));
        }
    }
}

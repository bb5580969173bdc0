/*!
# Connected Components

- [`ConnectedComponents`] emits the components of a graph whose edges are symmetric by restarting
  a BFS at the first unvisited node. Weak components run it on an
  [`AdjacencyView::undirected`] of the graph.
- [`StronglyConnectedComponents`] implements Kosaraju's algorithm with an explicit call stack, so
  very deep graphs do not overflow the stack.

The value-level entry points live in [`Connectivity`]. Components are returned with members in
node insertion order and are themselves ordered by their first member.
*/

use std::iter::FusedIterator;

use super::*;

/// Iterator over the components of a graph in which every edge has an opposite.
/// On directed graphs it yields the sets discovered by forward-only BFS restarts.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<NodeIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Implementation of Kosaraju's Algorithm for Strongly Connected Components.
///
/// The constructor runs the first pass (a DFS over all nodes recording their finish order). The
/// iterator then processes nodes in reverse finish order and emits everything reachable in the
/// transposed graph that has not been assigned yet as one component. Components are emitted in
/// topological order of the condensation.
pub struct StronglyConnectedComponents {
    transposed: AdjacencyView,
    finish_order: Vec<NodeIndex>,
    assigned: NodeBitSet,
}

impl StronglyConnectedComponents {
    /// Construct the iterator for some graph
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList,
    {
        Self {
            transposed: AdjacencyView::transposed(graph),
            finish_order: finish_order(graph),
            assigned: NodeBitSet::new(graph.number_of_nodes()),
        }
    }
}

impl Iterator for StronglyConnectedComponents {
    type Item = Vec<NodeIndex>;

    /// Returns either a vector of node ids that form an SCC or None if all nodes are assigned
    fn next(&mut self) -> Option<Self::Item> {
        let root = loop {
            let u = self.finish_order.pop()?;
            if !self.assigned.set_bit(u) {
                break u;
            }
        };

        let mut component = vec![root];
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for v in self.transposed.neighbors_of(u) {
                if !self.assigned.set_bit(v) {
                    component.push(v);
                    stack.push(v);
                }
            }
        }

        Some(component)
    }
}

impl FusedIterator for StronglyConnectedComponents {}

struct StackFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: NodeIndex,
    neighbors: G::NeighborIter<'a>,
}

/// Returns all nodes in DFS post-order. Roots are tried in index order.
fn finish_order<G>(graph: &G) -> Vec<NodeIndex>
where
    G: AdjacencyList,
{
    let mut visited = NodeBitSet::new(graph.number_of_nodes());
    let mut order = Vec::with_capacity(graph.len());
    let mut call_stack: Vec<StackFrame<'_, G>> = Vec::with_capacity(32);

    for root in graph.vertices() {
        if visited.set_bit(root) {
            continue;
        }

        call_stack.push(StackFrame {
            node: root,
            neighbors: graph.neighbors_of(root),
        });

        'recurse: while let Some(frame) = call_stack.last_mut() {
            let v = frame.node;

            for w in frame.neighbors.by_ref() {
                if !visited.set_bit(w) {
                    call_stack.push(StackFrame {
                        node: w,
                        neighbors: graph.neighbors_of(w),
                    });
                    continue 'recurse;
                }
            }

            order.push(v);
            call_stack.pop();
        }
    }

    order
}

/// Sorts the nodes in each component increasingly and then the components by their first node.
pub fn sort_components(mut components: Vec<Vec<NodeIndex>>) -> Vec<Vec<NodeIndex>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

/// Value-level component decompositions
pub trait Connectivity: NodeLookup + AdjacencyList {
    /// Partitions the nodes into maximal sets that are connected if edge directions are ignored.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(["a", "b", "c"], [("b", "a")]).unwrap();
    /// assert_eq!(
    ///     g.weakly_connected_components(),
    ///     vec![vec!["a", "b"], vec!["c"]]
    /// );
    /// ```
    fn weakly_connected_components(&self) -> Vec<Vec<Self::Value>> {
        let undirected = AdjacencyView::undirected(self);
        let components = sort_components(ConnectedComponents::new(&undirected).collect());
        debug!("found {} weakly connected components", components.len());

        components
            .into_iter()
            .map(|comp| self.values_of(comp))
            .collect()
    }

    /// Partitions the nodes into maximal sets in which every node reaches every other node.
    /// A node without incident edges is always its own component.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{prelude::*, algo::*};
    ///
    /// let g = UnweightedGraph::from_edges(
    ///     [1, 2, 3, 4],
    ///     [(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)],
    /// ).unwrap();
    /// assert_eq!(
    ///     g.strongly_connected_components(),
    ///     vec![vec![1, 2], vec![3, 4]]
    /// );
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<Self::Value>> {
        let components = sort_components(StronglyConnectedComponents::new(self).collect());
        debug!("found {} strongly connected components", components.len());

        components
            .into_iter()
            .map(|comp| self.values_of(comp))
            .collect()
    }

    /// Returns *true* if the graph has at most one strongly connected component
    /// (in particular for graphs with zero or one node)
    fn is_strongly_connected(&self) -> bool {
        StronglyConnectedComponents::new(self).nth(1).is_none()
    }
}

impl<G> Connectivity for G where G: NodeLookup + AdjacencyList {}

/*!
# Graph Operations

Capability traits shared by all graph representations. They come in two layers:

- an **index layer** ([`GraphNodeOrder`], [`AdjacencyList`], [`AdjacencyTest`], ...) working on dense
  [`NodeIndex`] values. It is what algorithms run on and what lightweight views implement.
  Methods of this layer **panic** on out-of-range indices.
- a **value layer** ([`NodeLookup`], [`ValueAdjacency`], [`GraphNodeEditing`], [`GraphEdgeEditing`],
  ...) that addresses nodes by their caller-supplied values and reports every misuse as a
  [`GraphError`].
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, error::*, node::*, utils::Set};

/// The edge type of a graph
pub type EdgeOf<G> = <<G as GraphEdgeEditing>::Label as EdgeLabel>::Edge<<G as NodeLookup>::Value>;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of all node indices. As the range does not borrow `self`, it may be
    /// used where additional mutable references of `self` are needed.
    fn vertices_range(&self) -> Range<NodeIndex> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over all node indices in insertion order
    fn vertices(&self) -> Range<NodeIndex> {
        self.vertices_range()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for (outgoing) neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Iterator returned by [`AdjacencyList::neighbors_of`]
    type NeighborIter<'a>: Iterator<Item = NodeIndex> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the out-neighbors of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: NodeIndex) -> Self::NeighborIter<'_>;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: NodeIndex) -> NumNodes;

    /// Returns an iterator over nodes `v` with edges `(v, u)`.
    /// This scans all vertices and should be avoided in hot loops.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.vertices()
            .filter(move |&v| self.neighbors_of(v).any(|w| w == u))
    }

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: NodeIndex) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    /// Returns the in-degree of every node computed in a single pass over all edges
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        in_degs
    }

    /// Returns the neighbors of `u` that are not yet contained in `visited`
    /// ** Panics if `u >= n` **
    fn unvisited_neighbors_of<'a, S>(
        &'a self,
        u: NodeIndex,
        visited: &'a S,
    ) -> impl Iterator<Item = NodeIndex> + 'a
    where
        S: Set<NodeIndex>,
    {
        self.neighbors_of(u).filter(move |v| !visited.contains(v))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: NodeIndex, v: NodeIndex) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: NodeIndex) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Maps node values to their dense indices and back
pub trait NodeLookup: GraphNodeOrder {
    /// The type of the stored node values
    type Value: NodeValue;

    /// Returns the value stored at index `u`
    /// ** Panics if `u >= n` **
    fn value_of(&self, u: NodeIndex) -> &Self::Value;

    /// Returns the index of a value if it is part of the graph
    fn index_of(&self, value: &Self::Value) -> Option<NodeIndex>;

    /// Returns the index of a value or [`GraphError::NodeNotFound`]
    fn try_index_of(&self, value: &Self::Value) -> Result<NodeIndex> {
        self.index_of(value)
            .ok_or_else(|| GraphError::not_found(value))
    }

    /// Returns *true* if the value is a node of the graph
    fn contains(&self, value: &Self::Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns an iterator over all node values in insertion order
    fn nodes(&self) -> impl Iterator<Item = &Self::Value> + '_ {
        self.vertices().map(|u| self.value_of(u))
    }

    /// Returns the set of all node values
    fn node_set(&self) -> ValueSet<Self::Value> {
        self.nodes().cloned().collect()
    }

    /// Maps indices back to (cloned) values
    fn values_of<I>(&self, nodes: I) -> Vec<Self::Value>
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        nodes
            .into_iter()
            .map(|u| self.value_of(u).clone())
            .collect()
    }
}

/// Value-level neighborhood queries
pub trait ValueAdjacency: NodeLookup + AdjacencyList {
    /// Returns the set of out-neighbors of `value`
    fn neighbors(&self, value: &Self::Value) -> Result<ValueSet<Self::Value>> {
        let u = self.try_index_of(value)?;
        Ok(self
            .neighbors_of(u)
            .map(|v| self.value_of(v).clone())
            .collect())
    }

    /// Returns the set of nodes with an edge pointing at `value`
    fn upstream_neighbors(&self, value: &Self::Value) -> Result<ValueSet<Self::Value>> {
        let u = self.try_index_of(value)?;
        Ok(self
            .in_neighbors_of(u)
            .map(|v| self.value_of(v).clone())
            .collect())
    }

    /// Returns the out-neighbors of `value` that are not contained in `visited`
    fn unvisited_neighbors(
        &self,
        value: &Self::Value,
        visited: &ValueSet<Self::Value>,
    ) -> Result<ValueSet<Self::Value>> {
        let u = self.try_index_of(value)?;
        Ok(self
            .neighbors_of(u)
            .map(|v| self.value_of(v))
            .filter(|v| !visited.contains(*v))
            .cloned()
            .collect())
    }
}

impl<G> ValueAdjacency for G where G: NodeLookup + AdjacencyList {}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph
    fn new() -> Self;

    /// Creates an empty graph with space reserved for `n` nodes
    fn with_capacity(n: NumNodes) -> Self;
}

/// Provides functions to insert nodes
pub trait GraphNodeEditing: NodeLookup {
    /// Adds `value` if absent. Returns its index and *true* exactly if the value was present
    /// before.
    fn try_add_node(&mut self, value: Self::Value) -> (NodeIndex, bool);

    /// Adds a new node.
    /// Fails with [`GraphError::DuplicateNode`] if the value is already present.
    fn add_node(&mut self, value: Self::Value) -> Result<NodeIndex> {
        if self.contains(&value) {
            return Err(GraphError::duplicate(&value));
        }
        Ok(self.try_add_node(value).0)
    }

    /// Adds all values as new nodes. Either all are added or, if any value is already present
    /// (or repeated), none is.
    fn add_nodes<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let values = values.into_iter().collect_vec();
        let mut seen = ValueSet::default();
        for value in &values {
            if self.contains(value) || !seen.insert(value) {
                return Err(GraphError::duplicate(value));
            }
        }

        for value in values {
            self.try_add_node(value);
        }
        Ok(())
    }
}

/// Provides functions to insert/delete labelled edges
pub trait GraphEdgeEditing: NodeLookup + AdjacencyList + GraphEdgeOrder {
    /// `()` for unweighted, [`Weight`] for weighted graphs
    type Label: EdgeLabel;

    /// Returns the label of the edge `(u, v)` if it exists
    /// ** Panics if `u >= n || v >= n` **
    fn label_of(&self, u: NodeIndex, v: NodeIndex) -> Option<Self::Label>;

    /// Returns the out-neighbors of `u` together with the edge labels
    /// ** Panics if `u >= n` **
    fn labelled_neighbors_of(
        &self,
        u: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Self::Label)> + '_;

    /// Adds the edge `(u, v)` or overwrites its label.
    /// Returns *true* exactly if the edge was present previously.
    /// The label is not validated on this layer.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: NodeIndex, v: NodeIndex, label: Self::Label) -> bool;

    /// Removes the directed edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: NodeIndex, v: NodeIndex) -> bool;

    /// Resolves both endpoints and validates the label of an edge without mutating the graph
    fn resolve_edge(&self, edge: EdgeOf<Self>) -> Result<(NodeIndex, NodeIndex, Self::Label)> {
        let (source, target, label) = edge.into_parts();
        let u = self.try_index_of(&source)?;
        let v = self.try_index_of(&target)?;
        Ok((u, v, label.validate()?))
    }

    /// Adds a directed edge. Re-adding an existing edge overwrites its label.
    /// Fails with [`GraphError::NodeNotFound`] if an endpoint is absent and with
    /// [`GraphError::NegativeWeight`] on negative weights.
    fn add_directed_edge<E>(&mut self, edge: E) -> Result<()>
    where
        E: Into<EdgeOf<Self>>,
    {
        let (u, v, label) = self.resolve_edge(edge.into())?;
        self.try_add_edge(u, v, label);
        Ok(())
    }

    /// Adds `edge` as well as its opposite
    fn add_undirected_edge<E>(&mut self, edge: E) -> Result<()>
    where
        E: Into<EdgeOf<Self>>,
    {
        let (u, v, label) = self.resolve_edge(edge.into())?;
        self.try_add_edge(u, v, label);
        self.try_add_edge(v, u, label);
        Ok(())
    }

    /// Adds all edges in the collection. All edges are validated before the first one is added.
    fn add_directed_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<EdgeOf<Self>>,
    {
        let edges: Vec<_> = edges
            .into_iter()
            .map(|e| self.resolve_edge(e.into()))
            .try_collect()?;
        for (u, v, label) in edges {
            self.try_add_edge(u, v, label);
        }
        Ok(())
    }

    /// Adds all edges in the collection together with their opposites.
    /// All edges are validated before the first one is added.
    fn add_undirected_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<EdgeOf<Self>>,
    {
        let edges: Vec<_> = edges
            .into_iter()
            .map(|e| self.resolve_edge(e.into()))
            .try_collect()?;
        for (u, v, label) in edges {
            self.try_add_edge(u, v, label);
            self.try_add_edge(v, u, label);
        }
        Ok(())
    }

    /// Returns an iterator over all edges as index-triples `(u, v, label)`
    fn index_edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, Self::Label)> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.labelled_neighbors_of(u)
                .map(move |(v, label)| (u, v, label))
        })
    }

    /// Returns an iterator over all edges
    fn edges(&self) -> impl Iterator<Item = EdgeOf<Self>> + '_ {
        self.index_edges().map(|(u, v, label)| {
            <EdgeOf<Self> as GraphEdge<Self::Value>>::from_parts(
                self.value_of(u).clone(),
                self.value_of(v).clone(),
                label,
            )
        })
    }

    /// Returns the set of all edges
    fn edge_set(&self) -> ValueSet<EdgeOf<Self>> {
        self.edges().collect()
    }
}

/// Copies and transposes a graph into a graph of the same kind.
/// Node indices are preserved by all operations.
pub trait GraphCopy: Sized {
    /// Returns a graph with the same nodes but no edges
    fn copy_without_edges(&self) -> Self;

    /// Returns a deep copy of the graph
    fn copy(&self) -> Self;

    /// Returns the graph with every edge replaced by its opposite
    fn transpose(&self) -> Self;
}

impl<G> GraphCopy for G
where
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing,
{
    fn copy_without_edges(&self) -> Self {
        let mut graph = Self::with_capacity(self.number_of_nodes());
        for value in self.nodes() {
            graph.try_add_node(value.clone());
        }
        graph
    }

    fn copy(&self) -> Self {
        let mut graph = self.copy_without_edges();
        for (u, v, label) in self.index_edges() {
            graph.try_add_edge(u, v, label);
        }
        graph
    }

    fn transpose(&self) -> Self {
        let mut graph = self.copy_without_edges();
        for (u, v, label) in self.index_edges() {
            graph.try_add_edge(v, u, label);
        }
        graph
    }
}

/// Classifies a graph as directed or undirected
pub trait GraphDirection {
    /// A graph is undirected iff every edge's opposite (with equal label) is present as well.
    /// This is vacuously *true* for graphs without edges.
    fn is_undirected(&self) -> bool;

    /// A graph is directed iff at least one edge's opposite is missing
    fn is_directed(&self) -> bool {
        !self.is_undirected()
    }
}

impl<G> GraphDirection for G
where
    G: GraphEdgeEditing,
{
    fn is_undirected(&self) -> bool {
        self.index_edges()
            .all(|(u, v, label)| self.label_of(v, u) == Some(label))
    }
}

/// Read access to edge weights of weighted graphs
pub trait WeightedAdjacency: GraphEdgeEditing<Label = Weight> {
    /// Returns the weight of the edge `(u, v)` if it exists
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: NodeIndex, v: NodeIndex) -> Option<Weight> {
        self.label_of(u, v)
    }

    /// Returns the weight of the edge `from -> to` or `None` if there is no such edge
    fn weight(&self, from: &Self::Value, to: &Self::Value) -> Result<Option<Weight>> {
        let u = self.try_index_of(from)?;
        let v = self.try_index_of(to)?;
        Ok(self.weight_of(u, v))
    }

    /// Returns all out-neighbors of `value` together with the weights of the connecting edges
    fn edges_from(&self, value: &Self::Value) -> Result<Vec<(Self::Value, Weight)>> {
        let u = self.try_index_of(value)?;
        Ok(self
            .labelled_neighbors_of(u)
            .map(|(v, w)| (self.value_of(v).clone(), w))
            .collect())
    }

    /// Returns the weights of all edges
    fn all_weights(&self) -> Vec<Weight> {
        self.index_edges().map(|(_, _, w)| w).collect()
    }

    /// Returns the largest edge weight or `None` if the graph has no edges
    fn max_weight(&self) -> Option<Weight> {
        self.index_edges().map(|(_, _, w)| w).max()
    }

    /// Removes the edge `from -> to` if it exists and returns *true* exactly if it existed
    fn remove_edge_if_existing(&mut self, from: &Self::Value, to: &Self::Value) -> Result<bool> {
        let u = self.try_index_of(from)?;
        let v = self.try_index_of(to)?;
        Ok(self.try_remove_edge(u, v))
    }
}

impl<G> WeightedAdjacency for G where G: GraphEdgeEditing<Label = Weight> {}

/// A super trait for creating a graph from scratch from a set of nodes and directed edges
pub trait GraphFromScratch: GraphEdgeEditing + Sized {
    /// Creates a graph from node values and (directed) edges.
    /// Fails if a node is repeated or an edge is invalid.
    fn from_edges<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = Self::Value>,
        E: IntoIterator,
        E::Item: Into<EdgeOf<Self>>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing,
{
    fn from_edges<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = Self::Value>,
        E: IntoIterator,
        E::Item: Into<EdgeOf<Self>>,
    {
        let mut graph = Self::new();
        graph.add_nodes(nodes)?;
        graph.add_directed_edges(edges)?;
        Ok(graph)
    }
}

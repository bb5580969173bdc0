/*!
`vgraphs` is a graph data structure & algorithms library for graphs whose nodes are arbitrary
**v**alues supplied by the caller (anything that is `Clone + Eq + Hash + Debug`).

# Representation

Nodes are stored as an **arena + index**: every graph keeps its node values in insertion order and
maps each value to a dense [`NodeIndex`](node::NodeIndex) (`u32`). Adjacency is kept per index,
so algorithms run on plain integers and only translate back to values at the boundary.

Edges are **directed**. We provide two kinds:

- [`Edge<T>`](edge::Edge) connects two values without further information,
- [`WeightedEdge<T>`](edge::WeightedEdge) additionally carries a non-negative
  [`Weight`](edge::Weight).

An *undirected* connection is represented by two opposite edges with equal label
(see [`GraphEdgeEditing::add_undirected_edge`](ops::GraphEdgeEditing::add_undirected_edge)).

### Available Representations

See the [`repr`] module:

- [`UnweightedGraph<T>`](repr::UnweightedGraph) only accepts [`Edge<T>`](edge::Edge),
- [`WeightedGraph<T>`](repr::WeightedGraph) only accepts [`WeightedEdge<T>`](edge::WeightedEdge).

Both are aliases of the generic [`LabelledGraph`](repr::LabelledGraph), so every operation and
every traversal-based algorithm is written once for both of them.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided
graph. The most commonly used functionality is also implemented via traits on the graph itself.

Operations come in two layers: an **index layer** that works on [`NodeIndex`](node::NodeIndex)
values and panics on out-of-range input, and a **value layer** that addresses nodes by value and
reports every misuse as a [`GraphError`](error::GraphError). A failing value-level call never
leaves a graph partially modified.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the graph
  representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS
  (`graph.bfs_path(&a, &b)`), Topological Sort, Connected Components, Dijkstra, MaxFlow, ...
- [`gens`] includes random graph generators, deterministic substructures (paths/cycles/cliques),
  an adjacency-matrix converter and a maze builder,
- [`utils`] includes the [`Set`](utils::Set) / [`Map`](utils::Map) abstractions used for the
  scratch state of algorithms.

In most use-cases, `use vgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use vgraphs::{prelude::*, algo::*};

let mut g = UnweightedGraph::new();
g.add_nodes(["A", "B", "C"]).unwrap();
g.add_undirected_edge(("A", "B")).unwrap();

assert_eq!(g.shortest_path(&"A", &"B").unwrap(), vec!["A", "B"]);
assert!(g.shortest_path(&"A", &"C").unwrap().is_empty());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `vgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::GraphError,
        node::*,
        ops::*,
        repr::*,
    };
}

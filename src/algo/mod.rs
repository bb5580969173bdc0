/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use vgraphs::algo::*;
```
and gain access to traversal, connectivity, cycle detection, shortest paths, flow and clique routines.

Every algorithm is available on two levels. The configurable structs (e.g. [`Dijkstra`],
[`MaxFlow`], [`CliqueSearch`]) work on node indices. Traits implemented on the graphs
themselves (e.g. [`PathSearch`], [`Connectivity`], [`NetworkFlow`]) take node values, map them
to indices and report absent nodes as errors. If possible, algorithms are provided as
**iterators**, making it easy to consume results lazily.
*/

mod cliques;
mod connectivity;
mod cycles;
mod longest_path;
mod network_flow;
mod shortest_path;
mod traversal;

use fxhash::FxHashSet;
use itertools::Itertools;
use log::{debug, trace};

use crate::{edge::*, error::*, node::*, ops::*, repr::*, utils::*};

pub use cliques::*;
pub use connectivity::*;
pub use cycles::*;
pub use longest_path::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use traversal::*;

/*!
# Adjacency Matrices

An adjacency matrix stores in slot `[i][j]` the weight of the edge from node `i` to node `j`.
[`AdjacencyMatrix`] validates such a matrix once and converts it into a [`WeightedGraph`] with
nodes `0..n`.
*/

use super::*;

/// A validated square weight matrix with zero diagonal
///
/// # Example
/// ```
/// use vgraphs::{prelude::*, gens::*};
///
/// let matrix = AdjacencyMatrix::new(vec![
///     vec![0, 0, 43],
///     vec![0, 0, 45],
///     vec![46, 0, 0],
/// ]).unwrap();
///
/// let all = matrix.connect_all().unwrap();
/// assert_eq!(all.number_of_edges(), 6);
///
/// let sparse = matrix.connect_except(0).unwrap();
/// assert_eq!(sparse.edges_from(&0).unwrap(), vec![(2, 43)]);
/// assert_eq!(sparse.number_of_edges(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Fails with [`GraphError::InvalidMatrix`] if the matrix is not square or a node has a
    /// non-zero weight to itself. The empty matrix is valid.
    pub fn new(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let n = rows.len();
        if let Some(i) = rows.iter().position(|row| row.len() != n) {
            return Err(GraphError::InvalidMatrix(format!(
                "row {i} has {} entries but the matrix has {n} rows",
                rows[i].len()
            )));
        }

        if let Some(i) = (0..n).find(|&i| rows[i][i] != 0) {
            return Err(GraphError::InvalidMatrix(format!(
                "the weight from node {i} to itself must be 0 but is {}",
                rows[i][i]
            )));
        }

        Ok(Self { rows })
    }

    /// Number of nodes of the represented graph
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns *true* if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Adds a directed edge for every off-diagonal slot, no matter its weight.
    /// Fails with [`GraphError::NegativeWeight`] if a slot is negative.
    pub fn connect_all(&self) -> Result<WeightedGraph<NodeIndex>> {
        self.connect_if(|_| true)
    }

    /// Like [`AdjacencyMatrix::connect_all`] but skips slots equal to `excluded`. This is useful
    /// if weights describe the quality of a connection and some value marks a missing one.
    pub fn connect_except(&self, excluded: Weight) -> Result<WeightedGraph<NodeIndex>> {
        self.connect_if(|w| w != excluded)
    }

    fn connect_if<F>(&self, mut keep: F) -> Result<WeightedGraph<NodeIndex>>
    where
        F: FnMut(Weight) -> bool,
    {
        let n = self.len() as NumNodes;
        let edges = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(u, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(v, &w)| (u as NodeIndex, v as NodeIndex, w))
            })
            .filter(|&(u, v, w)| u != v && keep(w));

        WeightedGraph::from_edges(0..n, edges)
    }
}

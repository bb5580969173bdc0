/*!
# Rectangular Mazes

A maze is a rectangular grid of slots where `0` marks a free slot and any other value a blocked
one. [`RectangularMaze`] turns it into an [`UnweightedGraph`] over [`Cell`]s: every slot becomes a
node and two free slots that are horizontally or vertically adjacent are connected by an
undirected edge. Blocked slots stay isolated.
*/

use super::*;

/// Position of a slot in a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A validated rectangular maze
///
/// # Example
/// ```
/// use vgraphs::{prelude::*, algo::*, gens::*};
///
/// let maze = RectangularMaze::new(vec![
///     vec![0, 1, 0],
///     vec![0, 1, 0],
///     vec![0, 0, 0],
/// ]).unwrap();
/// let g = maze.to_graph();
///
/// assert_eq!(g.len(), 9);
/// assert_eq!(g.shortest_path(&Cell::new(0, 0), &Cell::new(0, 2)).unwrap().len(), 7);
/// assert!(g.neighbors(&Cell::new(1, 1)).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangularMaze {
    slots: Vec<Vec<u8>>,
    width: usize,
    num_cells: NumNodes,
}

impl RectangularMaze {
    /// Value of a free slot
    pub const FREE_SLOT: u8 = 0;

    /// Fails with [`GraphError::InvalidMatrix`] if the maze has no rows, its rows differ in
    /// width or it has more cells than a graph can hold.
    pub fn new(slots: Vec<Vec<u8>>) -> Result<Self> {
        let Some(width) = slots.first().map(|row| row.len()) else {
            return Err(GraphError::InvalidMatrix("a maze needs at least one row".into()));
        };

        if let Some(i) = slots.iter().position(|row| row.len() != width) {
            return Err(GraphError::InvalidMatrix(format!(
                "row {i} has width {} but the maze has width {width}",
                slots[i].len()
            )));
        }

        let num_cells = cell_count(slots.len(), width)?;
        Ok(Self {
            slots,
            width,
            num_cells,
        })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.slots.len()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns *true* if the slot at `cell` exists and is free
    pub fn is_free(&self, cell: Cell) -> bool {
        self.slots
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .is_some_and(|&slot| slot == Self::FREE_SLOT)
    }

    /// Builds the graph with one node per slot (inserted row by row) and an undirected edge
    /// between every pair of adjacent free slots
    pub fn to_graph(&self) -> UnweightedGraph<Cell> {
        let mut graph = UnweightedGraph::with_capacity(self.num_cells);
        let cells = (0..self.height())
            .cartesian_product(0..self.width)
            .map(|(row, col)| Cell::new(row, col))
            .collect_vec();

        for &cell in &cells {
            graph.try_add_node(cell);
        }

        let index = |cell: Cell| (cell.row * self.width + cell.col) as NodeIndex;
        for &cell in cells.iter().filter(|&&c| self.is_free(c)) {
            let right = Cell::new(cell.row, cell.col + 1);
            let below = Cell::new(cell.row + 1, cell.col);

            for other in [right, below] {
                if self.is_free(other) {
                    graph.try_add_edge(index(cell), index(other), ());
                    graph.try_add_edge(index(other), index(cell), ());
                }
            }
        }

        graph
    }
}

/// Number of cells of a `height x width` maze if every cell fits a [`NodeIndex`]
fn cell_count(height: usize, width: usize) -> Result<NumNodes> {
    height
        .checked_mul(width)
        .and_then(|cells| NumNodes::try_from(cells).ok())
        .filter(|&cells| cells < INVALID_NODE)
        .ok_or_else(|| {
            GraphError::InvalidMatrix(format!(
                "a maze of {height} x {width} cells exceeds the maximum number of nodes"
            ))
        })
}

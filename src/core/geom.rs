//! Grid geometry: vertices, cells, and canonical edges.
//!
//! The board is a rectangular lattice. A board with `rows x cols` cells has
//! `(rows + 1) x (cols + 1)` vertices. Edges connect grid-adjacent vertices
//! (differing by exactly 1 in exactly one coordinate) and are stored in a
//! canonical sorted form so the same geometric edge always maps to one value.
//!
//! Nothing here is mutable game state - these are the value types every other
//! module speaks in.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A lattice point. Vertices exist for the lifetime of the board and are
/// identified purely by their coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub row: u16,
    pub col: u16,
}

impl Vertex {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Check grid adjacency: the two vertices differ by 1 in exactly one
    /// coordinate.
    #[must_use]
    pub fn is_adjacent(self, other: Vertex) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A grid cell, addressed by its top-left vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// The four edges bounding this cell: top, bottom, left, right.
    #[must_use]
    pub fn bounding_edges(self) -> [Edge; 4] {
        let Cell { row: r, col: c } = self;
        [
            Edge::new(Vertex::new(r, c), Vertex::new(r, c + 1)),
            Edge::new(Vertex::new(r + 1, c), Vertex::new(r + 1, c + 1)),
            Edge::new(Vertex::new(r, c), Vertex::new(r + 1, c)),
            Edge::new(Vertex::new(r, c + 1), Vertex::new(r + 1, c + 1)),
        ]
    }
}

/// An unordered pair of grid-adjacent vertices in canonical form.
///
/// The constructor sorts the endpoints, so `Edge::new(u, v) == Edge::new(v, u)`
/// and an edge set never holds duplicates of the same geometric edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    /// Create a canonical edge.
    ///
    /// Panics if the vertices are not grid-adjacent: a non-adjacent pair is a
    /// programming-contract violation, not a rejectable move.
    #[must_use]
    pub fn new(u: Vertex, v: Vertex) -> Self {
        assert!(u.is_adjacent(v), "edge endpoints must be grid-adjacent");
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    #[must_use]
    pub const fn endpoints(self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.a.row == self.b.row
    }

    /// The 1-2 in-bounds cells this edge borders.
    ///
    /// A horizontal edge borders the cells above and below it; a vertical edge
    /// the cells to its left and right. Edges on the board rim border one cell.
    #[must_use]
    pub fn bordering_cells(self, dims: Dims) -> SmallVec<[Cell; 2]> {
        let mut cells = SmallVec::new();
        if self.is_horizontal() {
            let r = self.a.row;
            let c = self.a.col.min(self.b.col);
            if r > 0 {
                cells.push(Cell::new(r - 1, c));
            }
            if r < dims.rows {
                cells.push(Cell::new(r, c));
            }
        } else {
            let r = self.a.row.min(self.b.row);
            let c = self.a.col;
            if c > 0 {
                cells.push(Cell::new(r, c - 1));
            }
            if c < dims.cols {
                cells.push(Cell::new(r, c));
            }
        }
        cells
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Board dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    pub rows: u16,
    pub cols: u16,
}

impl Dims {
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one cell");
        Self { rows, cols }
    }

    #[must_use]
    pub fn contains_vertex(self, v: Vertex) -> bool {
        v.row <= self.rows && v.col <= self.cols
    }

    #[must_use]
    pub fn contains_cell(self, c: Cell) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// All vertices in row-major order.
    pub fn vertices(self) -> impl Iterator<Item = Vertex> {
        let cols = self.cols;
        (0..=self.rows).flat_map(move |r| (0..=cols).map(move |c| Vertex::new(r, c)))
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }

    /// Every potential edge of the lattice: horizontal edges in row-major
    /// order, then vertical edges in row-major order.
    ///
    /// This order is load-bearing: candidate enumeration inherits it, and the
    /// move selector breaks score ties by it.
    pub fn all_edges(self) -> impl Iterator<Item = Edge> {
        let Dims { rows, cols } = self;
        let horizontal = (0..=rows).flat_map(move |r| {
            (0..cols).map(move |c| Edge::new(Vertex::new(r, c), Vertex::new(r, c + 1)))
        });
        let vertical = (0..rows).flat_map(move |r| {
            (0..=cols).map(move |c| Edge::new(Vertex::new(r, c), Vertex::new(r + 1, c)))
        });
        horizontal.chain(vertical)
    }

    /// In-bounds grid neighbors of a vertex (up, down, left, right).
    #[must_use]
    pub fn neighbors_of(self, v: Vertex) -> SmallVec<[Vertex; 4]> {
        let mut out = SmallVec::new();
        if v.row > 0 {
            out.push(Vertex::new(v.row - 1, v.col));
        }
        if v.row < self.rows {
            out.push(Vertex::new(v.row + 1, v.col));
        }
        if v.col > 0 {
            out.push(Vertex::new(v.row, v.col - 1));
        }
        if v.col < self.cols {
            out.push(Vertex::new(v.row, v.col + 1));
        }
        out
    }
}

/// Clue targets per cell. Immutable once a puzzle is generated; cells without
/// an entry are unconstrained.
pub type ClueMap = FxHashMap<Cell, u8>;

/// Fixed per-edge costs for the budgeted ruleset.
pub type EdgeWeights = FxHashMap<Edge, u32>;

/// A set of edges, used for reference solutions.
pub type EdgeSet = FxHashSet<Edge>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_form() {
        let u = Vertex::new(1, 2);
        let v = Vertex::new(1, 3);
        assert_eq!(Edge::new(u, v), Edge::new(v, u));
    }

    #[test]
    #[should_panic(expected = "grid-adjacent")]
    fn test_edge_rejects_non_adjacent() {
        let _ = Edge::new(Vertex::new(0, 0), Vertex::new(1, 1));
    }

    #[test]
    fn test_adjacency() {
        let v = Vertex::new(2, 2);
        assert!(v.is_adjacent(Vertex::new(1, 2)));
        assert!(v.is_adjacent(Vertex::new(2, 3)));
        assert!(!v.is_adjacent(Vertex::new(2, 2)));
        assert!(!v.is_adjacent(Vertex::new(3, 3)));
        assert!(!v.is_adjacent(Vertex::new(0, 2)));
    }

    #[test]
    fn test_edge_count_matches_lattice() {
        // rows*(cols+1) vertical + (rows+1)*cols horizontal
        let dims = Dims::new(3, 4);
        let count = dims.all_edges().count();
        assert_eq!(count, 3 * 5 + 4 * 4);
    }

    #[test]
    fn test_all_edges_are_distinct() {
        let dims = Dims::new(4, 4);
        let edges: FxHashSet<Edge> = dims.all_edges().collect();
        assert_eq!(edges.len(), dims.all_edges().count());
    }

    #[test]
    fn test_horizontal_edges_come_first() {
        let dims = Dims::new(2, 2);
        let edges: Vec<Edge> = dims.all_edges().collect();
        let horizontal = 3 * 2;
        assert!(edges[..horizontal].iter().all(|e| e.is_horizontal()));
        assert!(edges[horizontal..].iter().all(|e| !e.is_horizontal()));
    }

    #[test]
    fn test_bounding_edges_and_bordering_cells_agree() {
        let dims = Dims::new(3, 3);
        for cell in dims.cells() {
            for edge in cell.bounding_edges() {
                assert!(
                    edge.bordering_cells(dims).contains(&cell),
                    "cell {:?} not listed for edge {}",
                    cell,
                    edge
                );
            }
        }
    }

    #[test]
    fn test_rim_edge_borders_one_cell() {
        let dims = Dims::new(2, 2);
        let top = Edge::new(Vertex::new(0, 0), Vertex::new(0, 1));
        assert_eq!(top.bordering_cells(dims).as_slice(), &[Cell::new(0, 0)]);

        let interior = Edge::new(Vertex::new(1, 0), Vertex::new(1, 1));
        assert_eq!(
            interior.bordering_cells(dims).as_slice(),
            &[Cell::new(0, 0), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_neighbors_of_corner() {
        let dims = Dims::new(2, 2);
        let corner = dims.neighbors_of(Vertex::new(0, 0));
        assert_eq!(corner.len(), 2);
        let center = dims.neighbors_of(Vertex::new(1, 1));
        assert_eq!(center.len(), 4);
    }
}

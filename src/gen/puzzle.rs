//! Puzzle construction.
//!
//! A puzzle is built backwards from its answer: grow a random connected
//! region of cells, take the region's boundary as the solution loop, count
//! each cell's boundary sides to get its clue, then thin the clues by
//! difficulty. Region growth occasionally produces a boundary that is not
//! a single loop (the complement can be disconnected), so candidates are
//! verified and regrown from a forked stream until one passes.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::geom::{Cell, ClueMap, Dims, EdgeSet, EdgeWeights};
use crate::core::traverse::count_components;
use crate::core::BoardGraph;
use crate::game::GameSession;

use super::rng::GameRng;

/// Extra energy granted on top of the solution's total cost in budgeted
/// games, so a perfect line still leaves room for a few corrections.
const BUDGET_SLACK: i64 = 20;

/// Region growth rarely fails verification more than a handful of times.
const MAX_ATTEMPTS: u32 = 64;

/// How aggressively clues are thinned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability that a cell keeps its clue.
    #[must_use]
    pub fn keep_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 0.6,
            Difficulty::Hard => 0.4,
        }
    }
}

/// A generated puzzle: clues to play against, plus the hidden answer.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub dims: Dims,
    pub clues: ClueMap,
    /// The reference solution loop.
    pub solution: EdgeSet,
    /// Per-edge costs for the budgeted ruleset, in 1..=9.
    pub weights: EdgeWeights,
    /// Starting energy for budgeted play.
    pub budget: i64,
}

impl Puzzle {
    /// Start a standard game on this puzzle, reference solution attached.
    #[must_use]
    pub fn standard_session(&self) -> GameSession {
        GameSession::new(self.dims, self.clues.clone()).with_reference(self.solution.clone())
    }

    /// Start a budgeted game on this puzzle, reference solution attached.
    #[must_use]
    pub fn budgeted_session(&self) -> GameSession {
        GameSession::budgeted(self.dims, self.clues.clone(), self.weights.clone(), self.budget)
            .with_reference(self.solution.clone())
    }
}

/// Generate a puzzle. Deterministic in `(dims, difficulty, seed)`.
#[must_use]
pub fn generate(dims: Dims, difficulty: Difficulty, seed: u64) -> Puzzle {
    let mut rng = GameRng::new(seed);

    let mut weights = EdgeWeights::default();
    for edge in dims.all_edges() {
        weights.insert(edge, rng.gen_range(1..10));
    }

    // regrow from a fresh fork until the boundary verifies; the perimeter
    // fallback is itself always a single loop
    let mut solution = perimeter(dims);
    for _ in 0..MAX_ATTEMPTS {
        let mut attempt = rng.fork();
        let region = grow_region(dims, &mut attempt);
        let boundary = boundary_edges(dims, &region);
        if is_single_loop(dims, &boundary) {
            solution = boundary;
            break;
        }
    }

    let keep = difficulty.keep_probability();
    let mut clues = ClueMap::default();
    for cell in dims.cells() {
        let count = cell
            .bounding_edges()
            .iter()
            .filter(|e| solution.contains(e))
            .count() as u8;
        // count can only reach 4 on a degenerate one-cell grid; such a clue
        // has no legal reading, so it is never emitted
        if count <= 3 && rng.gen_bool(keep) {
            clues.insert(cell, count);
        }
    }

    let budget: i64 = solution
        .iter()
        .map(|e| weights.get(e).copied().unwrap_or(0) as i64)
        .sum::<i64>()
        + BUDGET_SLACK;

    Puzzle {
        dims,
        clues,
        solution,
        weights,
        budget,
    }
}

/// Grow a random connected cell region, Prim style: start from a random
/// cell and repeatedly annex a random frontier cell until the region covers
/// a randomly chosen share (40% to 70%) of the grid, with at least 2 cells
/// so no cell ends up clued 4.
fn grow_region(dims: Dims, rng: &mut GameRng) -> FxHashSet<Cell> {
    let total = dims.rows as usize * dims.cols as usize;
    let share = rng.gen_range_usize(400..700);
    let target = (total * share / 1000).max(2).min(total);

    let start = Cell::new(
        rng.gen_range(0..dims.rows as u32) as u16,
        rng.gen_range(0..dims.cols as u32) as u16,
    );

    let mut region: FxHashSet<Cell> = FxHashSet::default();
    let mut frontier: Vec<Cell> = Vec::new();
    region.insert(start);
    frontier.extend(cell_neighbors(dims, start));

    while region.len() < target && !frontier.is_empty() {
        let idx = rng.gen_range_usize(0..frontier.len());
        let cell = frontier.swap_remove(idx);
        if region.contains(&cell) {
            continue;
        }
        region.insert(cell);
        for n in cell_neighbors(dims, cell) {
            if !region.contains(&n) {
                frontier.push(n);
            }
        }
    }
    region
}

fn cell_neighbors(dims: Dims, cell: Cell) -> SmallVec<[Cell; 4]> {
    let mut out = SmallVec::new();
    if cell.row > 0 {
        out.push(Cell::new(cell.row - 1, cell.col));
    }
    if cell.row + 1 < dims.rows {
        out.push(Cell::new(cell.row + 1, cell.col));
    }
    if cell.col > 0 {
        out.push(Cell::new(cell.row, cell.col - 1));
    }
    if cell.col + 1 < dims.cols {
        out.push(Cell::new(cell.row, cell.col + 1));
    }
    out
}

/// An edge is on the boundary when exactly one of its bordering cells lies
/// inside the region. Off-grid counts as outside, so a perimeter edge of an
/// in-region cell is a boundary edge.
fn boundary_edges(dims: Dims, region: &FxHashSet<Cell>) -> EdgeSet {
    let mut out = EdgeSet::default();
    for edge in dims.all_edges() {
        // interior edges border two cells, perimeter edges one; either way
        // the edge separates region from non-region iff exactly one of its
        // bordering cells is inside
        let inside = edge
            .bordering_cells(dims)
            .iter()
            .filter(|c| region.contains(c))
            .count();
        if inside == 1 {
            out.insert(edge);
        }
    }
    out
}

/// True when the edges form exactly one closed loop: non-empty, every
/// touched vertex has degree 2, and everything is one connected component.
/// Degree-4 pinch vertices (regions touching diagonally) fail here.
fn is_single_loop(dims: Dims, edges: &EdgeSet) -> bool {
    if edges.is_empty() {
        return false;
    }
    let mut board = BoardGraph::new(dims);
    for edge in edges {
        let (u, v) = edge.endpoints();
        board.add_edge(u, v);
    }
    board.active_vertices().all(|v| board.degree(v) == 2) && count_components(&board) == 1
}

/// The outer rectangle of the whole grid.
fn perimeter(dims: Dims) -> EdgeSet {
    let mut region = FxHashSet::default();
    region.extend(dims.cells());
    boundary_edges(dims, &region)
}

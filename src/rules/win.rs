//! The win condition: one closed loop satisfying every clue.
//!
//! All four conditions must hold; there is no partial credit:
//! (a) every clued cell's edge count equals its target,
//! (b) at least one edge has been drawn,
//! (c) every vertex touched by an edge has degree exactly 2,
//! (d) the drawn edges form a single connected component.

use crate::core::geom::ClueMap;
use crate::core::{traverse, BoardGraph};

/// Whether the board is in a solved state.
#[must_use]
pub fn is_won(board: &BoardGraph, clues: &ClueMap) -> bool {
    for (&cell, &target) in clues {
        if board.cell_edge_count(cell) != target {
            return false;
        }
    }

    if board.is_empty() {
        return false;
    }

    for v in board.active_vertices() {
        if board.degree(v) != 2 {
            return false;
        }
    }

    traverse::count_components(board) == 1
}

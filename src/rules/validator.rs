//! Move legality: the three rules that gate adding an edge.
//!
//! Removing an edge is always legal (backtracking is unrestricted), so only
//! additions are checked:
//!
//! 1. **Degree rule** - neither endpoint may already have two edges.
//! 2. **Clue rule** - no bordering clued cell may be pushed past its target.
//! 3. **Premature-loop rule** - if the endpoints are already connected, the
//!    addition closes a loop. That is only legal when it can be the winning
//!    closure: no loose ends other than the endpoints themselves, and no
//!    second edge component left behind.
//!
//! All checks are pure. The "+1" effect of the proposed edge is computed
//! algebraically against the current board - the board is never touched, so
//! an early return can't leak a half-applied probe.

use serde::{Deserialize, Serialize};

use crate::core::geom::{ClueMap, Edge};
use crate::core::{traverse, BoardGraph};

/// Why a move was rejected. All variants are expected, recoverable outcomes
/// reported to the caller; none is ever raised as a panic.
///
/// `InsufficientBudget` is only produced by the session in the budgeted
/// ruleset and, unlike every other variant, ends the game as a loss for the
/// mover (observable via the session phase).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// An endpoint already has two incident edges.
    DegreeExceeded,
    /// A bordering clue would be pushed past its target.
    ClueViolated,
    /// The edge would close a loop while open ends or other fragments remain.
    PrematureLoop,
    /// It is not this player's turn.
    NotYourTurn,
    /// The game has already ended.
    GameOver,
    /// The mover cannot pay the edge cost; the game ends in their loss.
    InsufficientBudget,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            IllegalMoveReason::DegreeExceeded => "vertex degree would exceed 2",
            IllegalMoveReason::ClueViolated => "a clue would be exceeded",
            IllegalMoveReason::PrematureLoop => "would close a loop prematurely",
            IllegalMoveReason::NotYourTurn => "not your turn",
            IllegalMoveReason::GameOver => "the game is over",
            IllegalMoveReason::InsufficientBudget => "not enough energy to pay for this edge",
        };
        f.write_str(msg)
    }
}

/// Check whether adding `edge` (currently absent) is legal.
///
/// The caller is responsible for only asking about absent edges; asking about
/// a present edge answers the hypothetical "could it be added if absent",
/// which is rarely what you want.
pub fn check_add(
    board: &BoardGraph,
    clues: &ClueMap,
    edge: Edge,
) -> Result<(), IllegalMoveReason> {
    let (u, v) = edge.endpoints();

    // Rule 1: degree bound.
    if board.degree(u) >= 2 || board.degree(v) >= 2 {
        return Err(IllegalMoveReason::DegreeExceeded);
    }

    // Rule 2: clue bound on the 1-2 bordering cells.
    for cell in edge.bordering_cells(board.dims()) {
        if let Some(&target) = clues.get(&cell) {
            if board.cell_edge_count(cell) + 1 > target {
                return Err(IllegalMoveReason::ClueViolated);
            }
        }
    }

    // Rule 3: premature loop. If u and v are already joined by present
    // edges, this edge closes a cycle. Closing is only legal when the whole
    // board is one open path ending exactly at u and v: any third loose end
    // would be stranded, and any second component could never rejoin.
    if traverse::connected(board, u, v) {
        if traverse::loose_ends(board).len() > 2 {
            return Err(IllegalMoveReason::PrematureLoop);
        }
        if traverse::count_components(board) > 1 {
            return Err(IllegalMoveReason::PrematureLoop);
        }
    }

    Ok(())
}

/// Check a toggle: removal of a present edge is always legal, addition is
/// gated by `check_add`.
pub fn check_toggle(
    board: &BoardGraph,
    clues: &ClueMap,
    edge: Edge,
) -> Result<(), IllegalMoveReason> {
    if board.contains(edge) {
        Ok(())
    } else {
        check_add(board, clues, edge)
    }
}

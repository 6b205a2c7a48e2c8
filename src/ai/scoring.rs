//! The greedy scoring heuristic: one integer of desirability per candidate.
//!
//! Scores are a pure function of the current board, clues, weights, and the
//! single most recent log entry - one ply, no lookahead. All constants are
//! fixed integers; ties are broken downstream by the selector, never here.
//!
//! The tiers line up with the deadline thresholds in `ai::filter`: a
//! clue-completing move lands in the critical tier, a loop closure in the
//! second tier.

use serde::{Deserialize, Serialize};

use crate::core::geom::{ClueMap, Edge, EdgeWeights};
use crate::core::{traverse, BoardGraph};
use crate::game::log::{MoveAction, MoveRecord};

/// Sentinel for moves the opponent should never consider: undoing the move
/// just made, or touching a cell whose clue is 0.
pub const NEVER: i32 = -1_000;

/// Adding this edge makes a bordering clue exactly hit its target.
pub const CLUE_COMPLETE: i32 = 100;

/// Adding this edge would push a bordering clue past its target. The
/// validator filters such moves; the penalty guards the scorer if it is
/// ever called on raw candidates.
pub const CLUE_OVERSHOOT: i32 = -100;

/// Standing bonus for edges on a 3-clue cell, plus extra once the cell has
/// started filling in. Building toward near-full cells early pays off.
pub const THREE_CLUE: i32 = 5;
pub const THREE_CLUE_STARTED: i32 = 5;

/// Per-endpoint bonus for continuing an open path end.
pub const EXTEND_PATH: i32 = 25;

/// Penalty for an edge whose endpoints are both untouched - a new fragment.
pub const COLD_START: i32 = -5;

/// Bonus for a move that closes the loop (only reachable for the winning
/// closure; anything else was already rejected as illegal).
pub const CLOSE_LOOP: i32 = 50;

/// Cost multiplier in the budgeted ruleset: cheap edges are preferred.
pub const COST_FACTOR: i32 = 2;

/// A candidate move with its score, as ranked and exposed by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub edge: Edge,
    pub score: i32,
}

/// Score a single candidate edge (assumed absent and legal to add).
///
/// `last_move` is the newest committed log entry; `weights` is present only
/// in the budgeted ruleset.
#[must_use]
pub fn score_move(
    board: &BoardGraph,
    clues: &ClueMap,
    weights: Option<&EdgeWeights>,
    last_move: Option<&MoveRecord>,
    edge: Edge,
) -> i32 {
    // Anti-oscillation: re-adding what the previous turn removed would let
    // two greedy players ping-pong one edge forever.
    if let Some(last) = last_move {
        if last.action == MoveAction::Remove && last.edge == edge {
            return NEVER;
        }
    }

    let mut score = 0;

    for cell in edge.bordering_cells(board.dims()) {
        let Some(&target) = clues.get(&cell) else {
            continue;
        };
        if target == 0 {
            return NEVER;
        }
        let after = board.cell_edge_count(cell) + 1;
        if after == target {
            score += CLUE_COMPLETE;
        } else if after > target {
            score += CLUE_OVERSHOOT;
        }
        if target == 3 {
            score += THREE_CLUE;
            if board.cell_edge_count(cell) >= 1 {
                score += THREE_CLUE_STARTED;
            }
        }
    }

    let (u, v) = edge.endpoints();
    let (du, dv) = (board.degree(u), board.degree(v));
    if du == 1 {
        score += EXTEND_PATH;
    }
    if dv == 1 {
        score += EXTEND_PATH;
    }
    if du == 0 && dv == 0 {
        score += COLD_START;
    }

    if traverse::connected(board, u, v) {
        score += CLOSE_LOOP;
    }

    if let Some(weights) = weights {
        let cost = weights.get(&edge).copied().unwrap_or(0) as i32;
        score -= COST_FACTOR * cost;
    }

    score
}

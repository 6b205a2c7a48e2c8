//! The game session: sole owner of the board, clues, log, budgets, and phase.
//!
//! Every mutation funnels through `apply_move`, `undo`, and `redo`; the
//! validator, win checker, and opponent pipeline only ever borrow read
//! access. The session is single-threaded and synchronous - each call runs
//! to completion before the next, and a multi-threaded host must serialize
//! its calls.

use serde::{Deserialize, Serialize};

use crate::core::geom::{ClueMap, Dims, Edge, EdgeSet, EdgeWeights, Vertex};
use crate::core::{BoardGraph, PlayerId, PlayerMap};
use crate::rules::{check_add, is_won, IllegalMoveReason};

use super::log::{MoveAction, MoveLog, MoveRecord};

/// Where the game stands. Terminal phases accept no further moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Won(PlayerId),
    Stalemate,
}

impl GamePhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// Which rule variant is in play.
///
/// `Budgeted` adds a per-player energy pool: adding an edge costs its weight,
/// removing refunds it, and a mover who cannot pay loses on the spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruleset {
    Standard,
    Budgeted,
}

/// One puzzle instance being played.
#[derive(Clone, Debug)]
pub struct GameSession {
    dims: Dims,
    board: BoardGraph,
    clues: ClueMap,
    weights: EdgeWeights,
    reference: Option<EdgeSet>,
    ruleset: Ruleset,
    budgets: PlayerMap<i64>,
    turn: PlayerId,
    phase: GamePhase,
    log: MoveLog,
}

impl GameSession {
    /// Start a standard game. Edge weights and budgets are unused.
    ///
    /// The phase is derived from the opening position: a clue map that
    /// blocks every addition makes the game start stalemated.
    ///
    /// Panics if any clue cell lies outside the board; such a clue map is a
    /// programming-contract violation, not a playable puzzle.
    #[must_use]
    pub fn new(dims: Dims, clues: ClueMap) -> Self {
        assert!(
            clues.keys().all(|&c| dims.contains_cell(c)),
            "clue cells must lie on the board"
        );
        let mut session = Self {
            dims,
            board: BoardGraph::new(dims),
            clues,
            weights: EdgeWeights::default(),
            reference: None,
            ruleset: Ruleset::Standard,
            budgets: PlayerMap::with_value(0),
            turn: PlayerId::ONE,
            phase: GamePhase::InProgress,
            log: MoveLog::new(),
        };
        session.derive_phase();
        session
    }

    /// Start a budgeted game: both players begin with `budget` energy and
    /// pay edge weights to draw.
    #[must_use]
    pub fn budgeted(dims: Dims, clues: ClueMap, weights: EdgeWeights, budget: i64) -> Self {
        Self {
            weights,
            ruleset: Ruleset::Budgeted,
            budgets: PlayerMap::with_value(budget),
            ..Self::new(dims, clues)
        }
    }

    /// Attach a reference solution (used by the hint subsystem only).
    #[must_use]
    pub fn with_reference(mut self, solution: EdgeSet) -> Self {
        self.reference = Some(solution);
        self
    }

    // === Read access ===

    #[must_use]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[must_use]
    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    #[must_use]
    pub fn clues(&self) -> &ClueMap {
        &self.clues
    }

    #[must_use]
    pub fn weights(&self) -> &EdgeWeights {
        &self.weights
    }

    #[must_use]
    pub fn reference(&self) -> Option<&EdgeSet> {
        self.reference.as_ref()
    }

    #[must_use]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    #[must_use]
    pub fn budget(&self, player: PlayerId) -> i64 {
        self.budgets[player]
    }

    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// The cost of an edge: its weight in the budgeted ruleset, 0 otherwise.
    #[must_use]
    pub fn edge_cost(&self, edge: Edge) -> i64 {
        match self.ruleset {
            Ruleset::Standard => 0,
            Ruleset::Budgeted => self.weights.get(&edge).copied().unwrap_or(0) as i64,
        }
    }

    /// Every absent edge that would be legal to add right now, in the fixed
    /// enumeration order (horizontal row-major, then vertical row-major).
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Edge> {
        self.dims
            .all_edges()
            .filter(|&e| !self.board.contains(e))
            .filter(|&e| check_add(&self.board, &self.clues, e).is_ok())
            .collect()
    }

    // === Mutation ===

    /// Toggle the edge `u`-`v` as a move by `mover`.
    ///
    /// Present edges are removed (always legal; cost refunded in the
    /// budgeted ruleset). Absent edges are validated, then - in the budgeted
    /// ruleset - paid for; a mover who cannot pay loses immediately and the
    /// edge is not applied. On success the move is logged, the redo side is
    /// cleared, win/stalemate is re-checked, and the turn switches if the
    /// game continues.
    ///
    /// Panics if either endpoint lies off the board; callers are expected to
    /// address vertices of this session's grid.
    pub fn apply_move(
        &mut self,
        u: Vertex,
        v: Vertex,
        mover: PlayerId,
    ) -> Result<(), IllegalMoveReason> {
        assert!(
            self.dims.contains_vertex(u) && self.dims.contains_vertex(v),
            "move endpoints must lie on the board"
        );
        if self.phase.is_terminal() {
            return Err(IllegalMoveReason::GameOver);
        }
        if mover != self.turn {
            return Err(IllegalMoveReason::NotYourTurn);
        }

        let edge = Edge::new(u, v);
        let cost = self.edge_cost(edge);

        if self.board.contains(edge) {
            self.board.remove_edge(u, v);
            self.budgets[mover] += cost;
            self.log.push(MoveRecord {
                edge,
                action: MoveAction::Remove,
            });
        } else {
            check_add(&self.board, &self.clues, edge)?;

            if self.ruleset == Ruleset::Budgeted && self.budgets[mover] < cost {
                // Running dry is an immediate loss: the game ends, the edge
                // is never applied, and the log is untouched.
                self.phase = GamePhase::Won(mover.opponent());
                return Err(IllegalMoveReason::InsufficientBudget);
            }

            self.board.add_edge(u, v);
            self.budgets[mover] -= cost;
            self.log.push(MoveRecord {
                edge,
                action: MoveAction::Add,
            });
        }

        self.refresh_phase(mover);
        if self.phase == GamePhase::InProgress {
            self.turn = self.turn.opponent();
        }
        Ok(())
    }

    /// Reverse the most recent move as a full turn reversal: the edge
    /// operation, the budget adjustment, and the turn all roll back.
    /// Returns false if there is nothing to undo or the game is over.
    pub fn undo(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        let Some(record) = self.log.undo() else {
            return false;
        };

        // The undone move belongs to the player who is *not* on turn.
        let mover = self.turn.opponent();
        let (u, v) = record.edge.endpoints();
        let cost = self.edge_cost(record.edge);

        match record.action {
            MoveAction::Add => {
                self.board.remove_edge(u, v);
                self.budgets[mover] += cost;
            }
            MoveAction::Remove => {
                self.board.add_edge(u, v);
                self.budgets[mover] -= cost;
            }
        }
        self.turn = mover;
        true
    }

    /// Re-apply the most recently undone move, budget and turn included.
    /// Returns false if there is nothing to redo or the game is over.
    pub fn redo(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        let Some(record) = self.log.redo() else {
            return false;
        };

        // After an undo the original mover is back on turn.
        let mover = self.turn;
        let (u, v) = record.edge.endpoints();
        let cost = self.edge_cost(record.edge);

        match record.action {
            MoveAction::Add => {
                self.board.add_edge(u, v);
                self.budgets[mover] -= cost;
            }
            MoveAction::Remove => {
                self.board.remove_edge(u, v);
                self.budgets[mover] += cost;
            }
        }
        // A redone move re-creates a position that was in progress when
        // first played (the redo side is cleared on fresh moves), so no
        // status re-check is needed.
        self.turn = mover.opponent();
        true
    }

    fn refresh_phase(&mut self, mover: PlayerId) {
        if is_won(&self.board, &self.clues) {
            self.phase = GamePhase::Won(mover);
        } else if self.all_legal_moves().is_empty() {
            self.phase = GamePhase::Stalemate;
        }
    }

    /// Recompute the phase from the board alone; used when restoring a
    /// snapshot. The stored turn still points at the winning mover because
    /// the turn never switches out of a terminal position.
    pub(crate) fn derive_phase(&mut self) {
        if is_won(&self.board, &self.clues) {
            self.phase = GamePhase::Won(self.turn);
        } else if self.all_legal_moves().is_empty() {
            self.phase = GamePhase::Stalemate;
        } else {
            self.phase = GamePhase::InProgress;
        }
    }

    /// Restore raw state from a snapshot; only `snapshot` calls this.
    pub(crate) fn restore_parts(
        dims: Dims,
        clues: ClueMap,
        weights: EdgeWeights,
        reference: Option<EdgeSet>,
        ruleset: Ruleset,
        budgets: PlayerMap<i64>,
        turn: PlayerId,
        log: MoveLog,
    ) -> Self {
        let board = log.replay(dims);
        let mut session = Self {
            dims,
            board,
            clues,
            weights,
            reference,
            ruleset,
            budgets,
            turn,
            phase: GamePhase::InProgress,
            log,
        };
        session.derive_phase();
        session
    }
}

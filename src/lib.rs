//! # loopline
//!
//! A loop-drawing puzzle engine played against a greedy computer opponent.
//!
//! Players take turns toggling edges on a rectangular lattice, trying to
//! draw one closed loop whose sides match the numeric clues printed in the
//! cells. The engine validates every move, detects wins and stalemates,
//! and drives a deterministic opponent built from classic greedy
//! algorithms.
//!
//! ## Architecture
//!
//! - **Everything is deterministic**: the opponent pipeline has no
//!   randomness, and puzzle generation is seeded. Same inputs, same game.
//!
//! - **The session owns all state**: board, clues, budgets, history, and
//!   phase live in one `GameSession`; validators and the opponent only
//!   ever read.
//!
//! - **History is the source of truth**: snapshots persist the move log
//!   and replay it on restore, so a saved game can never disagree with
//!   its own board.
//!
//! ## Modules
//!
//! - `core`: Grid geometry, the board graph, players, traversal
//! - `rules`: Move validation and the win condition
//! - `ai`: Scoring heuristic, priority filters, the decision pipeline
//! - `game`: Session state machine, move log, snapshots, hints
//! - `gen`: Seeded puzzle generation

pub mod ai;
pub mod core;
pub mod game;
pub mod gen;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardGraph, Cell, ClueMap, Dims, Edge, EdgeSet, EdgeWeights, PlayerId, PlayerMap, Vertex,
};

pub use crate::rules::{check_add, check_toggle, is_won, IllegalMoveReason};

pub use crate::ai::{
    rank, score_move, CapacityFilter, DeadlineFilter, Decision, FilterStrategy, Opponent,
    PriorityFilter, ScoredMove,
};

pub use crate::game::{
    suggest, GamePhase, GameSession, Hint, HintReason, MoveAction, MoveLog, MoveRecord, Ruleset,
    Snapshot, SnapshotError,
};

pub use crate::gen::{generate, Difficulty, GameRng, Puzzle};

//! The computer opponent: scoring heuristic, priority filters, and the
//! decision pipeline that turns a position into a move.

pub mod filter;
pub mod opponent;
pub mod scoring;
pub mod select;

pub use filter::{CapacityFilter, DeadlineFilter, PriorityFilter};
pub use opponent::{Decision, FilterStrategy, Opponent};
pub use scoring::{score_move, ScoredMove};
pub use select::rank;

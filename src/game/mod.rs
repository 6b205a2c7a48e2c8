//! The playable game: session state machine, move history, persistence,
//! and hints.

pub mod hint;
pub mod log;
pub mod session;
pub mod snapshot;

pub use hint::{suggest, Hint, HintReason};
pub use log::{MoveAction, MoveLog, MoveRecord};
pub use session::{GamePhase, GameSession, Ruleset};
pub use snapshot::{Snapshot, SnapshotError};

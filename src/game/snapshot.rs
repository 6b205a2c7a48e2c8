//! Save and restore a session, history included.
//!
//! The snapshot stores the move log rather than the board; restoring
//! replays the log from an empty board, so a snapshot can never encode a
//! board that disagrees with its own history. Clues and weights are stored
//! as sorted pairs, which keeps the format stable across runs and usable
//! with text serializers that reject non-string map keys.

use serde::{Deserialize, Serialize};

use crate::core::geom::{Cell, ClueMap, Dims, Edge, EdgeSet, EdgeWeights};
use crate::core::{PlayerId, PlayerMap};

use super::log::MoveLog;
use super::session::{GameSession, Ruleset};

/// A complete, serializable image of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    dims: Dims,
    clues: Vec<(Cell, u8)>,
    weights: Vec<(Edge, u32)>,
    reference: Option<Vec<Edge>>,
    ruleset: Ruleset,
    budgets: PlayerMap<i64>,
    turn: PlayerId,
    log: MoveLog,
}

/// Snapshot decoding failures.
#[derive(Debug)]
pub enum SnapshotError {
    Decode(bincode::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Decode(err) => write!(f, "snapshot decode failed: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl Snapshot {
    /// Capture the session as it stands. Pure; the session is unchanged.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        let mut clues: Vec<(Cell, u8)> =
            session.clues().iter().map(|(&c, &n)| (c, n)).collect();
        clues.sort_unstable_by_key(|&(c, _)| c);

        let mut weights: Vec<(Edge, u32)> =
            session.weights().iter().map(|(&e, &w)| (e, w)).collect();
        weights.sort_unstable_by_key(|&(e, _)| e.endpoints());

        let reference = session.reference().map(|solution| {
            let mut edges: Vec<Edge> = solution.iter().copied().collect();
            edges.sort_unstable_by_key(|e| e.endpoints());
            edges
        });

        Self {
            dims: session.dims(),
            clues,
            weights,
            reference,
            ruleset: session.ruleset(),
            budgets: PlayerMap::new(|p| session.budget(p)),
            turn: session.turn(),
            log: session.log().clone(),
        }
    }

    /// Rebuild a live session by replaying the stored log. The phase is not
    /// stored; it is derived from the rebuilt board.
    #[must_use]
    pub fn restore(&self) -> GameSession {
        let clues: ClueMap = self.clues.iter().copied().collect();
        let weights: EdgeWeights = self.weights.iter().copied().collect();
        let reference: Option<EdgeSet> =
            self.reference.as_ref().map(|edges| edges.iter().copied().collect());

        GameSession::restore_parts(
            self.dims,
            clues,
            weights,
            reference,
            self.ruleset,
            self.budgets.clone(),
            self.turn,
            self.log.clone(),
        )
    }

    /// Encode to the compact binary form.
    ///
    /// Serialization of these plain structs cannot fail, so this returns
    /// the bytes directly.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    /// Decode from the binary form produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

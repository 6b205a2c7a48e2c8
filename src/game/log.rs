//! The move log: an ordered record of every edge toggle.
//!
//! The log is the source of truth for reconstruction: replaying it in order
//! from an empty board reproduces the current board exactly. Undo moves the
//! newest entry to the redo side; a fresh move clears the redo side.

use serde::{Deserialize, Serialize};

use crate::core::geom::{Dims, Edge};
use crate::core::BoardGraph;

/// What a move did to its edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAction {
    Add,
    Remove,
}

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub edge: Edge,
    pub action: MoveAction,
}

/// Append-only during play, truncated on undo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    past: Vec<MoveRecord>,
    future: Vec<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh move. Anything previously undone is no longer
    /// reachable and is discarded.
    pub fn push(&mut self, record: MoveRecord) {
        self.past.push(record);
        self.future.clear();
    }

    /// Move the newest entry to the redo side and return it.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.past.pop()?;
        self.future.push(record);
        Some(record)
    }

    /// Re-commit the most recently undone entry and return it.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        let record = self.future.pop()?;
        self.past.push(record);
        Some(record)
    }

    /// The most recent committed move.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.past.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.past.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Committed moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.past.iter()
    }

    /// Rebuild a board by replaying the committed moves from empty.
    #[must_use]
    pub fn replay(&self, dims: Dims) -> BoardGraph {
        let mut board = BoardGraph::new(dims);
        for record in &self.past {
            let (u, v) = record.edge.endpoints();
            match record.action {
                MoveAction::Add => board.add_edge(u, v),
                MoveAction::Remove => board.remove_edge(u, v),
            };
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geom::Vertex;

    fn rec(r1: u16, c1: u16, r2: u16, c2: u16, action: MoveAction) -> MoveRecord {
        MoveRecord {
            edge: Edge::new(Vertex::new(r1, c1), Vertex::new(r2, c2)),
            action,
        }
    }

    #[test]
    fn test_push_undo_redo() {
        let mut log = MoveLog::new();
        let a = rec(0, 0, 0, 1, MoveAction::Add);
        let b = rec(0, 1, 0, 2, MoveAction::Add);

        log.push(a);
        log.push(b);
        assert_eq!(log.len(), 2);

        assert_eq!(log.undo(), Some(b));
        assert_eq!(log.len(), 1);
        assert!(log.can_redo());

        assert_eq!(log.redo(), Some(b));
        assert_eq!(log.len(), 2);
        assert!(!log.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut log = MoveLog::new();
        log.push(rec(0, 0, 0, 1, MoveAction::Add));
        log.push(rec(0, 1, 0, 2, MoveAction::Add));
        log.undo();

        log.push(rec(1, 0, 1, 1, MoveAction::Add));
        assert!(!log.can_redo());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_replay_reproduces_board() {
        let dims = Dims::new(2, 2);
        let mut log = MoveLog::new();
        let mut board = BoardGraph::new(dims);

        let moves = [
            rec(0, 0, 0, 1, MoveAction::Add),
            rec(0, 1, 1, 1, MoveAction::Add),
            rec(0, 0, 0, 1, MoveAction::Remove),
            rec(1, 1, 1, 0, MoveAction::Add),
        ];
        for m in moves {
            let (u, v) = m.edge.endpoints();
            match m.action {
                MoveAction::Add => board.add_edge(u, v),
                MoveAction::Remove => board.remove_edge(u, v),
            };
            log.push(m);
        }

        assert_eq!(log.replay(dims), board);
    }

    #[test]
    fn test_empty_log_replays_empty_board() {
        let log = MoveLog::new();
        assert!(log.replay(Dims::new(3, 3)).is_empty());
    }
}

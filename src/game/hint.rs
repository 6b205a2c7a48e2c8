//! Hints for a stuck player.
//!
//! Two sources, tried in order. First, if the board has dangling path ends,
//! find the cheapest chain of legal additions bridging the two nearest ones
//! (Dijkstra over absent edges, priced by weight) and suggest its first
//! edge. Otherwise fall back to the reference solution when one is
//! attached: suggest drawing a missing solution edge, or erasing a stray
//! edge the solution does not contain.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::geom::{Edge, Vertex};
use crate::core::traverse::loose_ends;
use crate::rules::check_add;

use super::log::MoveAction;
use super::session::GameSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintReason {
    /// First step of the cheapest bridge between two dangling path ends.
    ConnectLooseEnds,
    /// The reference solution contains this edge and the board does not.
    SolutionEdge,
    /// The board contains this edge and the reference solution does not.
    StrayEdge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub edge: Edge,
    pub action: MoveAction,
    pub reason: HintReason,
}

/// Suggest one move for the player on turn, or `None` when the position
/// offers nothing to say (no loose ends and no reference solution, or the
/// game is over).
#[must_use]
pub fn suggest(session: &GameSession) -> Option<Hint> {
    if session.phase().is_terminal() {
        return None;
    }
    bridge_loose_ends(session).or_else(|| from_reference(session))
}

/// Dijkstra from the first loose end, walking only absent edges that pass
/// validation, each priced at its weight (at least 1). Stops at the first
/// other loose end reached and returns the path's first edge.
fn bridge_loose_ends(session: &GameSession) -> Option<Hint> {
    let ends = loose_ends(session.board());
    if ends.len() < 2 {
        return None;
    }
    let source = ends[0];

    let mut dist: FxHashMap<Vertex, u64> = FxHashMap::default();
    let mut prev: FxHashMap<Vertex, Vertex> = FxHashMap::default();
    let mut heap: BinaryHeap<Reverse<(u64, Vertex)>> = BinaryHeap::new();
    dist.insert(source, 0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d > dist.get(&u).copied().unwrap_or(u64::MAX) {
            continue;
        }
        if u != source && ends.contains(&u) {
            return Some(Hint {
                edge: first_step(&prev, source, u),
                action: MoveAction::Add,
                reason: HintReason::ConnectLooseEnds,
            });
        }
        for n in session.dims().neighbors_of(u) {
            let edge = Edge::new(u, n);
            if session.board().contains(edge)
                || check_add(session.board(), session.clues(), edge).is_err()
            {
                continue;
            }
            let step = session.weights().get(&edge).copied().unwrap_or(1).max(1) as u64;
            let nd = d + step;
            if nd < dist.get(&n).copied().unwrap_or(u64::MAX) {
                dist.insert(n, nd);
                prev.insert(n, u);
                heap.push(Reverse((nd, n)));
            }
        }
    }
    None
}

fn first_step(prev: &FxHashMap<Vertex, Vertex>, source: Vertex, target: Vertex) -> Edge {
    let mut cur = target;
    while let Some(&p) = prev.get(&cur) {
        if p == source {
            break;
        }
        cur = p;
    }
    Edge::new(source, cur)
}

/// Compare the board against the attached reference solution. Missing
/// solution edges that are legal to add come first, in the fixed edge
/// enumeration order; failing that, any stray edge is offered for removal.
fn from_reference(session: &GameSession) -> Option<Hint> {
    let solution = session.reference()?;

    for edge in session.dims().all_edges() {
        if solution.contains(&edge)
            && !session.board().contains(edge)
            && check_add(session.board(), session.clues(), edge).is_ok()
        {
            return Some(Hint {
                edge,
                action: MoveAction::Add,
                reason: HintReason::SolutionEdge,
            });
        }
    }
    for edge in session.dims().all_edges() {
        if session.board().contains(edge) && !solution.contains(&edge) {
            return Some(Hint {
                edge,
                action: MoveAction::Remove,
                reason: HintReason::StrayEdge,
            });
        }
    }
    None
}

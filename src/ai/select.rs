//! Final move selection: deterministic descending sort with a fixed
//! tie-break.
//!
//! Candidates with equal scores keep the relative order in which the
//! candidate generator produced them (a stable sort), so the whole pipeline
//! is reproducible move for move.

use super::scoring::ScoredMove;

/// Rank candidates by score, best first. Stable: ties keep input order.
#[must_use]
pub fn rank(mut candidates: Vec<ScoredMove>) -> Vec<ScoredMove> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

//! The computer opponent: a fixed pipeline from position to chosen move.
//!
//! candidates -> score -> priority filter -> stable rank -> pick first.
//! Every stage is deterministic, so the same position always yields the
//! same decision regardless of which filter strategy is configured.

use serde::{Deserialize, Serialize};

use crate::core::geom::Edge;
use crate::game::{GameSession, Ruleset};

use super::filter::{CapacityFilter, DeadlineFilter, PriorityFilter};
use super::scoring::{score_move, ScoredMove};
use super::select::rank;

/// Which priority filter the opponent runs. Serializable so a host can
/// persist the opponent configuration alongside a saved game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterStrategy {
    /// Knapsack-style: admit the best score-per-cost moves under a capacity.
    Capacity { capacity: u32 },
    /// Scheduling-style: slot moves into urgency tiers, best profit first.
    Deadline,
}

impl FilterStrategy {
    #[must_use]
    pub fn build(self) -> Box<dyn PriorityFilter> {
        match self {
            FilterStrategy::Capacity { capacity } => Box::new(CapacityFilter::new(capacity)),
            FilterStrategy::Deadline => Box::new(DeadlineFilter),
        }
    }
}

impl Default for FilterStrategy {
    fn default() -> Self {
        FilterStrategy::Capacity {
            capacity: CapacityFilter::DEFAULT_CAPACITY,
        }
    }
}

/// The outcome of one decision pass. The full ranked list is kept so a host
/// can display or log what the opponent considered.
#[derive(Clone, Debug)]
pub struct Decision {
    pub edge: Edge,
    pub ranked: Vec<ScoredMove>,
}

pub struct Opponent {
    strategy: FilterStrategy,
    filter: Box<dyn PriorityFilter>,
}

impl Opponent {
    #[must_use]
    pub fn new(strategy: FilterStrategy) -> Self {
        Self {
            strategy,
            filter: strategy.build(),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> FilterStrategy {
        self.strategy
    }

    /// Decide the opponent's next move for the current position.
    ///
    /// Returns `None` when no legal add exists; never proposes a removal.
    /// A decision with an all-negative ranked list is still returned - the
    /// opponent must move on its turn even when every option looks bad.
    #[must_use]
    pub fn decide(&self, session: &GameSession) -> Option<Decision> {
        let weights = match session.ruleset() {
            Ruleset::Budgeted => Some(session.weights()),
            Ruleset::Standard => None,
        };
        let last_move = session.log().last();

        let candidates: Vec<ScoredMove> = session
            .all_legal_moves()
            .into_iter()
            .map(|edge| ScoredMove {
                edge,
                score: score_move(
                    session.board(),
                    session.clues(),
                    weights,
                    last_move,
                    edge,
                ),
            })
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let ranked = rank(self.filter.filter(&candidates, weights));
        let edge = ranked.first()?.edge;
        Some(Decision { edge, ranked })
    }
}

//! Budgeted candidate filters: two interchangeable narrowing strategies.
//!
//! Before the final ranking, the opponent narrows the scored candidates with
//! one of two greedy selection algorithms. Which one is in play is fixed per
//! opponent instance by configuration (`ai::opponent::FilterStrategy`) -
//! never re-chosen at random per turn - so a given opponent is fully
//! deterministic and the two strategies can be compared head to head.
//!
//! Shared contract: given a non-empty input, the output is non-empty (the
//! unfiltered input is returned if filtering would drop everything), scores
//! are never altered, and the output preserves the input's relative order so
//! the selector's tie-break stays anchored to candidate-generation order.

use crate::core::geom::EdgeWeights;

use super::scoring::ScoredMove;

/// A candidate-narrowing strategy. Object-safe so opponents can hold any
/// strategy behind one pointer.
pub trait PriorityFilter: Send + Sync {
    /// Narrow `candidates`. `weights` carries edge costs in the budgeted
    /// ruleset; absent edges (or the map itself) default to cost 1.
    fn filter(&self, candidates: &[ScoredMove], weights: Option<&EdgeWeights>) -> Vec<ScoredMove>;

    fn name(&self) -> &'static str;
}

fn cost_of(candidate: &ScoredMove, weights: Option<&EdgeWeights>) -> u32 {
    weights
        .and_then(|w| w.get(&candidate.edge).copied())
        .unwrap_or(1)
        .max(1)
}

/// Collect the candidates at `picked` indices in input order.
fn in_input_order(candidates: &[ScoredMove], mut picked: Vec<usize>) -> Vec<ScoredMove> {
    picked.sort_unstable();
    picked.into_iter().map(|i| candidates[i]).collect()
}

// =============================================================================
// Variant A: capacity-bounded fractional selection
// =============================================================================

/// Fractional-knapsack filter.
///
/// Positive-scoring candidates are items with value = score and weight = edge
/// cost. Items are taken greedily by value/weight ratio until the capacity is
/// reached; the single item straddling the boundary is admitted as a
/// "partial" - fractional value only ever decides inclusion order, so the
/// partial still resolves to its whole move in the output.
#[derive(Clone, Debug)]
pub struct CapacityFilter {
    pub capacity: u32,
}

impl CapacityFilter {
    pub const DEFAULT_CAPACITY: u32 = 8;

    #[must_use]
    pub fn new(capacity: u32) -> Self {
        Self { capacity }
    }
}

impl Default for CapacityFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl PriorityFilter for CapacityFilter {
    fn filter(&self, candidates: &[ScoredMove], weights: Option<&EdgeWeights>) -> Vec<ScoredMove> {
        // (input index, value, weight) for positive-scoring candidates only
        let mut items: Vec<(usize, i64, u32)> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.score > 0)
            .map(|(i, c)| (i, c.score as i64, cost_of(c, weights)))
            .collect();

        // Ratio-descending order, exact via cross-multiplication; stable, so
        // equal ratios keep input order.
        items.sort_by(|a, b| (b.1 * a.2 as i64).cmp(&(a.1 * b.2 as i64)));

        let mut picked = Vec::new();
        let mut load: u64 = 0;
        for (index, _, weight) in items {
            if load + weight as u64 <= self.capacity as u64 {
                load += weight as u64;
                picked.push(index);
            } else {
                // The boundary item fills the remaining capacity fractionally
                // and the knapsack is full.
                picked.push(index);
                break;
            }
        }

        if picked.is_empty() && !candidates.is_empty() {
            return candidates.to_vec();
        }
        in_input_order(candidates, picked)
    }

    fn name(&self) -> &'static str {
        "capacity"
    }
}

// =============================================================================
// Variant B: deadline-tiered selection
// =============================================================================

/// Job-sequencing filter.
///
/// Each positive-scoring candidate becomes a job whose deadline reflects its
/// urgency tier; jobs are scheduled profit-first into the latest free slot at
/// or before their deadline, and unscheduled jobs are dropped. Tight
/// deadlines mean "must act on this now"; the wide low tier lets filler
/// moves through only when slots remain.
#[derive(Clone, Debug, Default)]
pub struct DeadlineFilter;

impl DeadlineFilter {
    /// Urgency tier by score threshold, aligned with the scoring constants:
    /// clue completions are critical, loop closures high, path work medium.
    fn deadline_for(score: i32) -> usize {
        if score >= 100 {
            1
        } else if score >= 50 {
            2
        } else if score >= 10 {
            3
        } else {
            5
        }
    }
}

impl PriorityFilter for DeadlineFilter {
    fn filter(&self, candidates: &[ScoredMove], _weights: Option<&EdgeWeights>) -> Vec<ScoredMove> {
        // (input index, score, deadline) for positive-scoring candidates
        let mut jobs: Vec<(usize, i32, usize)> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.score > 0)
            .map(|(i, c)| (i, c.score, Self::deadline_for(c.score)))
            .collect();

        // Profit-descending; stable, so equal scores keep input order.
        jobs.sort_by(|a, b| b.1.cmp(&a.1));

        let max_deadline = jobs.iter().map(|j| j.2).max().unwrap_or(0);
        let mut slot_filled = vec![false; max_deadline];
        let mut picked = Vec::new();

        for (index, _, deadline) in jobs {
            // Latest free slot at or before the deadline keeps earlier slots
            // open for stricter jobs.
            for slot in (0..deadline.min(max_deadline)).rev() {
                if !slot_filled[slot] {
                    slot_filled[slot] = true;
                    picked.push(index);
                    break;
                }
            }
        }

        if picked.is_empty() && !candidates.is_empty() {
            return candidates.to_vec();
        }
        in_input_order(candidates, picked)
    }

    fn name(&self) -> &'static str {
        "deadline"
    }
}

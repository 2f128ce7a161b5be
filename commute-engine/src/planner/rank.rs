//! Multi-objective candidate ranking.
//!
//! Ranks a candidate set on three objectives (time, cost, carbon — all
//! lower-is-better): per-objective 1-based ranks, a Pareto-efficiency
//! annotation, and a preference-weighted composite score that drives
//! the final ordering.

use tracing::debug;

use crate::domain::{Candidate, EngineError, Preference};

/// Rank candidates under a preference.
///
/// Assigns `rank_fastest`, `rank_cheapest` and `rank_eco` (1-based
/// positions in per-objective sorts, with ties broken by mode
/// generation order), computes each candidate's composite score, and returns the
/// set sorted by score descending. Equal scores are broken by mode
/// declaration order so the output is deterministic.
///
/// The full set is always returned; Pareto dominance never filters it
/// (see [`pareto_efficient`] for the annotation).
///
/// # Errors
///
/// Returns [`EngineError::InvariantViolation`] if the set is empty or
/// contains the same mode twice — the generator always produces one
/// candidate per mode, so either case is a caller bug.
pub fn rank_candidates(
    mut candidates: Vec<Candidate>,
    preference: Preference,
) -> Result<Vec<Candidate>, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::InvariantViolation("candidate set is empty"));
    }
    for (i, c) in candidates.iter().enumerate() {
        if candidates[..i].iter().any(|prev| prev.mode == c.mode) {
            return Err(EngineError::InvariantViolation(
                "candidate set contains a duplicate mode",
            ));
        }
    }

    assign_objective_ranks(&mut candidates);
    assign_scores(&mut candidates, preference);

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.mode.cmp(&b.mode))
    });

    debug!(
        preference = %preference,
        best = %candidates[0].mode,
        score = candidates[0].score,
        "ranked commute candidates"
    );

    Ok(candidates)
}

/// Returns true if `a` dominates `b`: no worse on time, cost and
/// carbon, and strictly better on at least one.
pub fn dominates(a: &Candidate, b: &Candidate) -> bool {
    a.total_time_minutes <= b.total_time_minutes
        && a.total_cost <= b.total_cost
        && a.carbon_kg <= b.carbon_kg
        && (a.total_time_minutes < b.total_time_minutes
            || a.total_cost < b.total_cost
            || a.carbon_kg < b.carbon_kg)
}

/// Pareto-efficiency flags, aligned with the input order.
///
/// A candidate is efficient iff no other candidate dominates it. This
/// is an annotation for callers that want the efficient frontier; the
/// ranking itself never filters on it. Exhaustive pairwise comparison
/// is fine at this scale (at most one candidate per mode).
pub fn pareto_efficient(candidates: &[Candidate]) -> Vec<bool> {
    candidates
        .iter()
        .map(|c| !candidates.iter().any(|other| dominates(other, c)))
        .collect()
}

/// Assign the three per-objective ranks in place.
fn assign_objective_ranks(candidates: &mut [Candidate]) {
    let fastest = objective_ranks(candidates, |c| f64::from(c.total_time_minutes));
    let cheapest = objective_ranks(candidates, |c| c.total_cost);
    let eco = objective_ranks(candidates, |c| c.carbon_kg);

    for (i, c) in candidates.iter_mut().enumerate() {
        c.rank_fastest = fastest[i];
        c.rank_cheapest = cheapest[i];
        c.rank_eco = eco[i];
    }
}

/// 1-based rank per input index for one objective.
///
/// Equal values rank in mode generation order, not in slice order:
/// the ranked output is itself reordered by score, so slice-order ties
/// would shift when an already-ranked set is ranked again.
fn objective_ranks(candidates: &[Candidate], value: impl Fn(&Candidate) -> f64) -> Vec<u32> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        value(&candidates[a])
            .total_cmp(&value(&candidates[b]))
            .then_with(|| candidates[a].mode.cmp(&candidates[b].mode))
    });

    let mut ranks = vec![0u32; candidates.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position as u32 + 1;
    }
    ranks
}

/// Assign composite scores in place.
fn assign_scores(candidates: &mut [Candidate], preference: Preference) {
    let weights = preference.weights();
    let time = normalized(candidates, |c| f64::from(c.total_time_minutes));
    let cost = normalized(candidates, |c| c.total_cost);
    let carbon = normalized(candidates, |c| c.carbon_kg);

    for (i, c) in candidates.iter_mut().enumerate() {
        c.score = weights.time * time[i] + weights.cost * cost[i] + weights.carbon * carbon[i];
    }
}

/// Normalize one objective to `[0, 1]` as `1 - value / max`, so zero
/// maps to 1 and the worst candidate maps to 0. A degenerate objective
/// (max of 0, or every candidate equal) scores 1 for everyone rather
/// than dividing by zero or penalizing the whole set.
fn normalized(candidates: &[Candidate], value: impl Fn(&Candidate) -> f64) -> Vec<f64> {
    let max = candidates.iter().map(&value).fold(f64::MIN, f64::max);
    let min = candidates.iter().map(&value).fold(f64::MAX, f64::min);

    if max <= 0.0 || min == max {
        return vec![1.0; candidates.len()];
    }

    candidates.iter().map(|c| 1.0 - value(c) / max).collect()
}

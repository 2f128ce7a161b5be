//! Commute candidate types.
//!
//! A `Candidate` is one mode's projected summary for a specific trip:
//! total time, monetary cost, carbon emissions, and the step breakdown.
//! A full candidate set (one per mode) is generated fresh for every
//! planning request, annotated by the ranking engine, and returned;
//! nothing outlives the request.

use serde::{Deserialize, Serialize};

use super::Mode;

/// One sub-leg of a journey.
///
/// Single-mode candidates carry one step spanning the whole trip;
/// `mixed` candidates decompose into several legs. Step durations and
/// distances are expected to approximate the parent candidate's totals
/// (up to rounding), but this is not enforced at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Transport mode for this leg.
    pub mode: Mode,
    /// Human-readable label for the leg's start.
    pub from: String,
    /// Human-readable label for the leg's end.
    pub to: String,
    /// Leg duration in minutes.
    pub duration_minutes: u32,
    /// Leg distance in kilometres.
    pub distance_km: f64,
}

impl Step {
    /// Creates a step.
    pub fn new(
        mode: Mode,
        from: impl Into<String>,
        to: impl Into<String>,
        duration_minutes: u32,
        distance_km: f64,
    ) -> Self {
        Self {
            mode,
            from: from.into(),
            to: to.into(),
            duration_minutes,
            distance_km,
        }
    }
}

/// One mode's projected commute summary.
///
/// Produced by the candidate generator with ranks and score zeroed;
/// the ranking engine assigns the three 1-based objective ranks and the
/// composite score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The transport mode this candidate represents.
    pub mode: Mode,
    /// Projected door-to-door time in minutes.
    pub total_time_minutes: u32,
    /// Projected monetary cost.
    pub total_cost: f64,
    /// Projected carbon emissions in kilograms.
    pub carbon_kg: f64,
    /// Trip distance in kilometres.
    pub distance_km: f64,
    /// Ordered sub-legs; never empty.
    pub steps: Vec<Step>,
    /// 1-based position when sorted by time ascending; 0 until ranked.
    pub rank_fastest: u32,
    /// 1-based position when sorted by cost ascending; 0 until ranked.
    pub rank_cheapest: u32,
    /// 1-based position when sorted by carbon ascending; 0 until ranked.
    pub rank_eco: u32,
    /// Preference-weighted composite score in `[0, 1]`; 0 until ranked.
    pub score: f64,
}

impl Candidate {
    /// Creates an unranked candidate.
    pub fn new(
        mode: Mode,
        total_time_minutes: u32,
        total_cost: f64,
        carbon_kg: f64,
        distance_km: f64,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            mode,
            total_time_minutes,
            total_cost,
            carbon_kg,
            distance_km,
            steps,
            rank_fastest: 0,
            rank_cheapest: 0,
            rank_eco: 0,
            score: 0.0,
        }
    }

    /// Sum of step durations in minutes.
    pub fn steps_duration_minutes(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_minutes).sum()
    }

    /// Sum of step distances in kilometres.
    pub fn steps_distance_km(&self) -> f64 {
        self.steps.iter().map(|s| s.distance_km).sum()
    }
}

//! Commute planning: candidate generation and multi-objective ranking.
//!
//! This module implements the core planning pipeline that answers:
//! "for this trip, which transport mode should I take?"
//!
//! Given a distance/time baseline, the generator projects one candidate
//! per supported mode, and the ranking engine orders the set by a
//! preference-weighted combination of time, cost and carbon, with
//! per-objective ranks and an optional Pareto-efficiency annotation.

mod generate;
mod plan;
mod rank;

pub use generate::generate_candidates;
pub use plan::{MetricsProvider, PlanError, PlanRequest, PlanResult, Planner, TripBaseline};
pub use rank::{dominates, pareto_efficient, rank_candidates};

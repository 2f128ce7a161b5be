//! Commute alternatives ranking engine.
//!
//! Answers: "for this origin-destination trip, which transport mode
//! should I take?" Given a distance/time baseline, the engine produces
//! one candidate per transport mode (time, cost, carbon, step breakdown)
//! and ranks the set under a caller-chosen optimization preference.
//!
//! The engine is pure and synchronous: no I/O, no randomness, no shared
//! state. Data acquisition (geocoding, traffic, transit APIs) lives
//! behind the [`planner::MetricsProvider`] trait supplied by the caller.

pub mod domain;
pub mod planner;

mod util;

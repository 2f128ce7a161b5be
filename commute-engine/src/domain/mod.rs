//! Domain types for the commute alternatives engine.
//!
//! This module contains the core domain model: transport modes,
//! per-mode commute candidates with their step breakdowns, and the
//! optimization preference profiles. Types enforce their invariants at
//! construction time where practical; the ranking invariants are checked
//! by the planner at its entry points.

mod candidate;
mod error;
mod mode;
mod preference;

pub use candidate::{Candidate, Step};
pub use error::EngineError;
pub use mode::Mode;
pub use preference::{ObjectiveWeights, Preference};

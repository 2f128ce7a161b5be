//! Planning orchestration.
//!
//! Wires the candidate generator and ranking engine behind a single
//! entry point, with trip data acquisition abstracted behind
//! [`MetricsProvider`] so the engine stays deterministic: traffic,
//! mapping or mocked data sources live on the caller's side of the
//! trait, never inside the scoring pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Candidate, EngineError, Preference};

use super::generate::generate_candidates;
use super::rank::rank_candidates;

/// Error from trip planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// The plan request is malformed.
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),

    /// The metrics provider could not supply a baseline for the trip.
    #[error("failed to fetch trip metrics for {origin} -> {destination}: {message}")]
    Metrics {
        /// Requested origin.
        origin: String,
        /// Requested destination.
        destination: String,
        /// Provider-supplied failure detail.
        message: String,
    },

    /// The generation/ranking core rejected its input.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Distance/time baseline for a trip.
///
/// `base_time_minutes` is the fastest theoretically available traversal
/// of the trip; mode candidates scale it by their time factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripBaseline {
    /// Trip distance in kilometres.
    pub distance_km: f64,
    /// Baseline traversal time in minutes.
    pub base_time_minutes: f64,
}

/// Trait for supplying trip baselines.
///
/// This abstraction keeps the engine testable and reproducible: any
/// external data source (or mock) implements it, and the planner never
/// generates metrics itself.
pub trait MetricsProvider {
    /// Get the distance/time baseline for a trip.
    fn trip_baseline(&self, origin: &str, destination: &str)
    -> Result<TripBaseline, PlanError>;
}

/// Request for commute planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Origin label, as understood by the metrics provider.
    pub origin: String,
    /// Destination label, as understood by the metrics provider.
    pub destination: String,
    /// Optimization preference; defaults to balanced.
    #[serde(default)]
    pub preference: Preference,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        preference: Preference,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            preference,
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.origin.trim().is_empty() {
            return Err(PlanError::InvalidRequest("origin is blank".to_string()));
        }
        if self.destination.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "destination is blank".to_string(),
            ));
        }
        if self.origin.trim() == self.destination.trim() {
            return Err(PlanError::InvalidRequest(
                "origin and destination are the same place".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of commute planning.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    /// Candidates sorted by composite score descending, one per mode,
    /// with objective ranks assigned.
    pub candidates: Vec<Candidate>,
    /// The preference the scores were computed under.
    pub preference: Preference,
}

/// Commute planner.
///
/// Pure and stateless apart from the borrowed provider; safe to share
/// across request-handling threads, with each call operating on its own
/// freshly generated candidate set.
pub struct Planner<'a, P: MetricsProvider> {
    provider: &'a P,
}

impl<'a, P: MetricsProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Plan commute alternatives for a trip.
    ///
    /// Fetches the baseline from the provider, generates one candidate
    /// per mode and ranks them under the request's preference.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] for a malformed request,
    /// [`PlanError::Metrics`] if the provider fails, and
    /// [`PlanError::Engine`] if the provider hands back an out-of-contract
    /// baseline (non-positive distance or time).
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanResult, PlanError> {
        request.validate()?;

        let baseline = self
            .provider
            .trip_baseline(&request.origin, &request.destination)?;

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            distance_km = baseline.distance_km,
            base_time_minutes = baseline.base_time_minutes,
            "fetched trip baseline"
        );

        let candidates = generate_candidates(baseline.distance_km, baseline.base_time_minutes)?;
        let candidates = rank_candidates(candidates, request.preference)?;

        debug!(
            candidates = candidates.len(),
            preference = %request.preference,
            best = %candidates[0].mode,
            "planned commute alternatives"
        );

        Ok(PlanResult {
            candidates,
            preference: request.preference,
        })
    }
}

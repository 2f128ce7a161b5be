//! Transport mode type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transport option for a commute.
///
/// The set is closed: every planning request produces exactly one
/// candidate per variant. Declaration order is the generation order,
/// and doubles as the deterministic tie-break order when two candidates
/// compare equal on an objective or on composite score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Door-to-door taxi/ride-hail.
    Cab,
    /// Public bus.
    Bus,
    /// Suburban/regional rail.
    Train,
    /// Urban metro/subway.
    Metro,
    /// Walking the whole way.
    Walk,
    /// Multi-leg trip combining walking with transit.
    Mixed,
}

impl Mode {
    /// All supported modes, in generation order.
    pub const ALL: [Mode; 6] = [
        Mode::Cab,
        Mode::Bus,
        Mode::Train,
        Mode::Metro,
        Mode::Walk,
        Mode::Mixed,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cab => "cab",
            Mode::Bus => "bus",
            Mode::Train => "train",
            Mode::Metro => "metro",
            Mode::Walk => "walk",
            Mode::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

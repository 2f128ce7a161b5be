//! Optimization preference profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-objective weights used to combine normalized time/cost/carbon
/// scores into a single composite. Weights sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveWeights {
    /// Weight on travel time.
    pub time: f64,
    /// Weight on monetary cost.
    pub cost: f64,
    /// Weight on carbon emissions.
    pub carbon: f64,
}

/// Caller-selected weighting profile for the composite score.
///
/// Unknown preference strings deserialize/parse as [`Preference::Balanced`]
/// rather than failing; the preference selects a weighting, it is not a
/// validated identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Favour low monetary cost.
    Cheapest,
    /// Favour low travel time.
    Fastest,
    /// Favour low carbon emissions.
    Greenest,
    /// Roughly equal weight on all three objectives.
    ///
    /// Kept last: `#[serde(other)]` must sit on the final variant.
    #[default]
    #[serde(other)]
    Balanced,
}

impl Preference {
    /// Parse a preference string leniently.
    ///
    /// Recognizes the four profile names (case-insensitive); anything
    /// else falls back to `Balanced`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "cheapest" => Preference::Cheapest,
            "fastest" => Preference::Fastest,
            "greenest" => Preference::Greenest,
            _ => Preference::Balanced,
        }
    }

    /// The weighting profile for this preference.
    pub fn weights(&self) -> ObjectiveWeights {
        match self {
            Preference::Balanced => ObjectiveWeights {
                time: 0.33,
                cost: 0.33,
                carbon: 0.34,
            },
            Preference::Fastest => ObjectiveWeights {
                time: 0.70,
                cost: 0.15,
                carbon: 0.15,
            },
            Preference::Cheapest => ObjectiveWeights {
                time: 0.15,
                cost: 0.70,
                carbon: 0.15,
            },
            Preference::Greenest => ObjectiveWeights {
                time: 0.15,
                cost: 0.15,
                carbon: 0.70,
            },
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Balanced => "balanced",
            Preference::Cheapest => "cheapest",
            Preference::Fastest => "fastest",
            Preference::Greenest => "greenest",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

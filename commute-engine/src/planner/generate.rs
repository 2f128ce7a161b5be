//! Candidate generation.
//!
//! Projects a distance/time baseline into one commute candidate per
//! supported mode, using fixed per-mode factors: a multiplicative time
//! factor applied to the baseline, an affine cost model over distance
//! (and, for cabs, time), and a per-kilometre emission factor.

use tracing::debug;

use crate::domain::{Candidate, EngineError, Mode, Step};
use crate::util::{round2, round3};

/// Fixed projection factors for one mode.
struct ModeProfile {
    mode: Mode,
    /// Multiplier on the baseline traversal time.
    time_factor: f64,
    /// Flag-fall component of the fare.
    base_fare: f64,
    /// Fare per kilometre.
    cost_per_km: f64,
    /// Fare per minute of the mode-adjusted time (cabs only).
    cost_per_minute: f64,
    /// Emissions in kg CO2 per kilometre.
    emission_kg_per_km: f64,
}

/// Projection factors per mode, in generation order.
const PROFILES: [ModeProfile; 6] = [
    ModeProfile {
        mode: Mode::Cab,
        time_factor: 0.6,
        base_fare: 5.0,
        cost_per_km: 1.5,
        cost_per_minute: 0.2,
        emission_kg_per_km: 0.192,
    },
    ModeProfile {
        mode: Mode::Bus,
        time_factor: 1.2,
        base_fare: 2.5,
        cost_per_km: 0.1,
        cost_per_minute: 0.0,
        emission_kg_per_km: 0.089,
    },
    ModeProfile {
        mode: Mode::Train,
        time_factor: 0.7,
        base_fare: 3.0,
        cost_per_km: 0.15,
        cost_per_minute: 0.0,
        emission_kg_per_km: 0.041,
    },
    ModeProfile {
        mode: Mode::Metro,
        time_factor: 0.8,
        base_fare: 2.0,
        cost_per_km: 0.12,
        cost_per_minute: 0.0,
        emission_kg_per_km: 0.041,
    },
    ModeProfile {
        mode: Mode::Walk,
        time_factor: 3.0,
        base_fare: 0.0,
        cost_per_km: 0.0,
        cost_per_minute: 0.0,
        emission_kg_per_km: 0.0,
    },
    ModeProfile {
        mode: Mode::Mixed,
        time_factor: 0.9,
        base_fare: 4.0,
        cost_per_km: 0.8,
        cost_per_minute: 0.0,
        emission_kg_per_km: 0.100,
    },
];

/// Share of a mixed trip's time spent on each walking leg.
const MIXED_WALK_TIME_SHARE: f64 = 0.10;
/// Share of a mixed trip's distance covered by each walking leg.
const MIXED_WALK_DIST_SHARE: f64 = 0.05;
/// Share of a mixed trip's time spent on the metro leg.
const MIXED_METRO_TIME_SHARE: f64 = 0.40;
/// Share of a mixed trip's distance covered by the metro leg.
const MIXED_METRO_DIST_SHARE: f64 = 0.45;

/// Generate one unranked candidate per supported mode.
///
/// `base_time_minutes` is the fastest theoretically available traversal
/// of the trip; each mode scales it by its time factor. Costs are
/// rounded to cents and emissions to grams.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if either argument is not
/// strictly positive and finite. Inputs are never clamped.
pub fn generate_candidates(
    distance_km: f64,
    base_time_minutes: f64,
) -> Result<Vec<Candidate>, EngineError> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "distance_km must be positive, got {distance_km}"
        )));
    }
    if !base_time_minutes.is_finite() || base_time_minutes <= 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "base_time_minutes must be positive, got {base_time_minutes}"
        )));
    }

    let candidates: Vec<Candidate> = PROFILES
        .iter()
        .map(|profile| profile.project(distance_km, base_time_minutes))
        .collect();

    debug!(
        distance_km,
        base_time_minutes,
        candidates = candidates.len(),
        "generated mode candidates"
    );

    Ok(candidates)
}

impl ModeProfile {
    /// Project the baseline through this mode's factors.
    fn project(&self, distance_km: f64, base_time_minutes: f64) -> Candidate {
        let total_time_minutes = (base_time_minutes * self.time_factor).round() as u32;

        // The per-minute fare component applies to the mode-adjusted
        // (already rounded) time, not the baseline.
        let total_cost = round2(
            self.base_fare
                + self.cost_per_km * distance_km
                + self.cost_per_minute * f64::from(total_time_minutes),
        );
        let carbon_kg = round3(distance_km * self.emission_kg_per_km);

        let steps = match self.mode {
            Mode::Mixed => mixed_steps(total_time_minutes, distance_km),
            mode => vec![Step::new(
                mode,
                "Origin",
                "Destination",
                total_time_minutes,
                distance_km,
            )],
        };

        Candidate::new(
            self.mode,
            total_time_minutes,
            total_cost,
            carbon_kg,
            distance_km,
            steps,
        )
    }
}

/// Decompose a mixed trip into its fixed four-leg sequence:
/// walk to the metro, metro to an interchange, bus onward, walk to the
/// destination. The bus leg absorbs the rounding remainder so leg sums
/// track the parent totals.
fn mixed_steps(total_minutes: u32, distance_km: f64) -> Vec<Step> {
    let total = f64::from(total_minutes);
    let walk_minutes = (total * MIXED_WALK_TIME_SHARE).round() as u32;
    let metro_minutes = (total * MIXED_METRO_TIME_SHARE).round() as u32;
    let bus_minutes = total_minutes.saturating_sub(2 * walk_minutes + metro_minutes);

    let walk_km = round3(distance_km * MIXED_WALK_DIST_SHARE);
    let metro_km = round3(distance_km * MIXED_METRO_DIST_SHARE);
    let bus_km = round3(distance_km - 2.0 * walk_km - metro_km);

    vec![
        Step::new(Mode::Walk, "Origin", "Metro station", walk_minutes, walk_km),
        Step::new(
            Mode::Metro,
            "Metro station",
            "Interchange",
            metro_minutes,
            metro_km,
        ),
        Step::new(Mode::Bus, "Interchange", "Bus stop", bus_minutes, bus_km),
        Step::new(Mode::Walk, "Bus stop", "Destination", walk_minutes, walk_km),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_candidate_per_mode_in_generation_order() {
        let candidates = generate_candidates(15.5, 45.0).unwrap();
        let modes: Vec<Mode> = candidates.iter().map(|c| c.mode).collect();
        assert_eq!(modes, Mode::ALL);
    }

    #[test]
    fn reference_trip_walk_and_cab() {
        // 15.5 km, 45 min baseline: the worked reference values.
        let candidates = generate_candidates(15.5, 45.0).unwrap();

        let walk = candidates.iter().find(|c| c.mode == Mode::Walk).unwrap();
        assert_eq!(walk.total_time_minutes, 135);
        assert_eq!(walk.total_cost, 0.0);
        assert_eq!(walk.carbon_kg, 0.0);

        let cab = candidates.iter().find(|c| c.mode == Mode::Cab).unwrap();
        assert_eq!(cab.total_time_minutes, 27);
        // 5.0 + 1.5 * 15.5 + 0.2 * 27
        assert_eq!(cab.total_cost, 33.65);
        // 15.5 * 0.192
        assert_eq!(cab.carbon_kg, 2.976);
    }

    #[test]
    fn reference_trip_transit_modes() {
        let candidates = generate_candidates(15.5, 45.0).unwrap();

        let bus = candidates.iter().find(|c| c.mode == Mode::Bus).unwrap();
        assert_eq!(bus.total_time_minutes, 54);
        assert!((bus.total_cost - 4.05).abs() < 1e-9);

        let train = candidates.iter().find(|c| c.mode == Mode::Train).unwrap();
        // 45 * 0.7 is 31.4999… in f64, so half-away rounding gives 31.
        assert_eq!(train.total_time_minutes, 31);

        let metro = candidates.iter().find(|c| c.mode == Mode::Metro).unwrap();
        assert_eq!(metro.total_time_minutes, 36);
        assert!((metro.total_cost - 3.86).abs() < 1e-9);
    }

    #[test]
    fn single_mode_candidates_carry_one_whole_trip_step() {
        let candidates = generate_candidates(10.0, 30.0).unwrap();
        for c in candidates.iter().filter(|c| c.mode != Mode::Mixed) {
            assert_eq!(c.steps.len(), 1, "{}", c.mode);
            let step = &c.steps[0];
            assert_eq!(step.mode, c.mode);
            assert_eq!(step.from, "Origin");
            assert_eq!(step.to, "Destination");
            assert_eq!(step.duration_minutes, c.total_time_minutes);
            assert_eq!(step.distance_km, c.distance_km);
        }
    }

    #[test]
    fn mixed_decomposes_into_four_legs() {
        let candidates = generate_candidates(15.5, 45.0).unwrap();
        let mixed = candidates.iter().find(|c| c.mode == Mode::Mixed).unwrap();

        let leg_modes: Vec<Mode> = mixed.steps.iter().map(|s| s.mode).collect();
        assert_eq!(leg_modes, [Mode::Walk, Mode::Metro, Mode::Bus, Mode::Walk]);
        assert_eq!(mixed.steps[0].from, "Origin");
        assert_eq!(mixed.steps[3].to, "Destination");

        // Legs must approximate the parent totals.
        assert_eq!(mixed.steps_duration_minutes(), mixed.total_time_minutes);
        assert!((mixed.steps_distance_km() - mixed.distance_km).abs() < 1e-3);
    }

    #[test]
    fn rejects_non_positive_distance() {
        assert!(matches!(
            generate_candidates(0.0, 45.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            generate_candidates(-3.2, 45.0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_positive_time() {
        assert!(matches!(
            generate_candidates(15.5, 0.0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            generate_candidates(15.5, -1.0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(generate_candidates(f64::NAN, 45.0).is_err());
        assert!(generate_candidates(15.5, f64::INFINITY).is_err());
    }
}

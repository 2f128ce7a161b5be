//! Shared numeric rounding helpers.

/// Round to 2 decimal places (monetary amounts).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (kilograms, kilometres).
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_cents() {
        assert_eq!(round2(33.654), 33.65);
        assert_eq!(round2(33.655), 33.66);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn round3_grams() {
        assert_eq!(round3(2.9759), 2.976);
        assert_eq!(round3(0.0004), 0.0);
    }
}

/// Largest relative boost applied to a nutrient that tests low.
pub const MAX_BOOST: f64 = 0.30;

/// Floor for the threshold divisor, so a zero threshold cannot divide by zero.
const MIN_THRESHOLD: f64 = 1e-6;

/// Round to the nearest integer, ties to even. Every rounding in the
/// advisory goes through this so expected values stay reproducible.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Round to `decimals` places from the exact binary value: 0.015 is stored as
/// 0.01499.. and gives 0.01. Float formatting is correctly rounded; scaling by
/// a power of ten would round a second time.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// How far `soil_value` sits below `low_threshold`, normalized to 0..=1.
pub fn severity(soil_value: f64, low_threshold: f64) -> f64 {
    ((low_threshold - soil_value) / low_threshold.max(MIN_THRESHOLD)).clamp(0.0, 1.0)
}

/// Recommended amount of one nutrient.
///
/// At or above the threshold the crop's base need is used as-is. Below it
/// the base is scaled up by as much as [`MAX_BOOST`], proportional to severity.
pub fn adjust_nutrient(base: f64, soil_value: f64, low_threshold: f64) -> i64 {
    if soil_value < low_threshold {
        let boost = 1.0 + MAX_BOOST * severity(soil_value, low_threshold);
        round_half_even(base * boost)
    } else {
        round_half_even(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_even_ties() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(-2.5), -2);
        assert_eq!(round_half_even(2.6), 3);
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(5.0, 2), 5.0);
        assert_eq!(round_to(6.456, 2), 6.46);
        assert_eq!(round_to(-1.234, 2), -1.23);
    }

    #[test]
    fn round_to_uses_exact_binary_value() {
        // These decimals are not exactly representable; the stored value decides.
        assert_eq!(round_to(0.015, 2), 0.01);
        assert_eq!(round_to(6.015, 2), 6.01);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.005, 2), 0.01);
    }

    #[test]
    fn round_to_passes_non_finite_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn severity_is_clamped() {
        assert_eq!(severity(30.0, 30.0), 0.0);
        assert_eq!(severity(40.0, 30.0), 0.0);
        assert_eq!(severity(15.0, 30.0), 0.5);
        assert_eq!(severity(0.0, 30.0), 1.0);
        assert_eq!(severity(-10.0, 30.0), 1.0);
    }

    #[test]
    fn zero_threshold_does_not_divide_by_zero() {
        let s = severity(-1.0, 0.0);
        assert!(s.is_finite());
        assert_eq!(s, 1.0);
        assert_eq!(adjust_nutrient(100.0, -1.0, 0.0), 130);
    }

    #[test]
    fn at_threshold_uses_base() {
        assert_eq!(adjust_nutrient(120.0, 30.0, 30.0), 120);
        assert_eq!(adjust_nutrient(60.4, 20.0, 20.0), 60);
    }

    #[test]
    fn below_threshold_boosts_up_to_thirty_percent() {
        // severity 1/3 -> 120 * 1.1 = 132
        assert_eq!(adjust_nutrient(120.0, 20.0, 30.0), 132);
        assert_eq!(adjust_nutrient(120.0, 0.0, 30.0), 156);
        assert_eq!(adjust_nutrient(120.0, -50.0, 30.0), 156);
    }

    #[test]
    fn lower_soil_never_lowers_estimate() {
        let base = 47.0;
        let threshold = 25.0;
        let mut previous = adjust_nutrient(base, 40.0, threshold);
        let mut soil = 40.0;
        while soil > -10.0 {
            soil -= 0.25;
            let current = adjust_nutrient(base, soil, threshold);
            assert!(current >= previous, "soil {soil}: {current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn estimate_never_below_rounded_base() {
        for base in [0.0, 1.0, 39.5, 40.5, 120.0] {
            for soil in [-5.0, 0.0, 10.0, 29.9, 30.0, 90.0] {
                assert!(adjust_nutrient(base, soil, 30.0) >= round_half_even(base));
            }
        }
    }
}

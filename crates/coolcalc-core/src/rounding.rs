//! Display rounding shared by the CSV export and the CLI.
//!
//! `format!("{:.N}")` breaks exact binary ties towards the even digit. Saved
//! exports have always rounded those ties away from zero, so every figure
//! that leaves the crate as text goes through these helpers.

/// Fixed-point text with `digits` decimals.
///
/// Rounds on the exact binary value: `2.625` (exactly representable) becomes
/// `"2.63"`, while `1.005` (stored just below) stays `"1.00"`.
pub fn to_fixed(value: f64, digits: u32) -> String {
    let precision = digits as usize;
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // A tie at N decimals is an odd multiple of 1/2^(N+1) scaled by 5^N, so
    // the value must sit on the 2^-(N+1) grid for `scaled` to be exact.
    let on_tie_grid = (value * 2f64.powi(digits as i32 + 1)).fract() == 0.0;

    if on_tie_grid && scaled.fract().abs() == 0.5 {
        format!("{:.precision$}", scaled.round() / scale)
    } else {
        format!("{value:.precision$}")
    }
}

/// Nearest integer with halves rounded towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(2.625, 2), "2.63");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-2.625, 2), "-2.63");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.25, 1), "0.3");
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.45, 1), "1.4");
        assert_eq!(to_fixed(2.675, 2), "2.67");
    }

    #[test]
    fn ordinary_values_format_normally() {
        assert_eq!(to_fixed(2.0, 2), "2.00");
        assert_eq!(to_fixed(0.7582537, 2), "0.76");
        assert_eq!(to_fixed(20.0, 1), "20.0");
    }

    #[test]
    fn halves_round_up_for_negatives_too() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(6824.284), 6824.0);
    }
}

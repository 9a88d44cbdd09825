//! Cent-level rounding shared by every calculator.

/// Rounds a monetary amount to two decimals.
///
/// A value sitting exactly half a cent between two cents resolves toward
/// positive infinity, for negative amounts too.
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Converts a fraction into a percentage with two decimals (`0.2 -> 20.0`).
pub fn round_percentage(fraction: f64) -> f64 {
    round_half_up(fraction * 10_000.0) / 100.0
}

fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    // f64::round moves negative halves away from zero.
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

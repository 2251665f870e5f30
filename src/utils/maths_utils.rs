/// Rounds to the nearest integer, with exact halves going towards +∞.
///
/// This is the rounding every published figure goes through (prices, band offsets,
/// scenario spreads). It differs from `f64::round` only on negative halves:
/// `round_half_up(-2.5) == -2.0` whereas `(-2.5f64).round() == -3.0`.
#[inline]
pub fn round_half_up(val: f64) -> f64 {
    let floor = val.floor();
    if val - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Rounds to a fixed number of decimals, halves away from zero (fixed-point text semantics).
/// Used for percentages: `round_to_decimals(1.35, 1) == 1.4`.
#[inline]
pub fn round_to_decimals(val: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (val * scale).round() / scale
}

/// Percentage move from `reference` to `price`, e.g. 6583 vs 6083.86 -> 8.204...
/// Returns 0.0 when the reference is not a usable divisor.
#[inline]
pub fn pct_change(price: f64, reference: f64) -> f64 {
    if reference.abs() > f64::EPSILON {
        (price / reference - 1.0) * 100.0
    } else {
        0.0
    }
}

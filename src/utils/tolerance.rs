/// Absolute tolerance for treating a value as an integer
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Returns the integer `value` rounds to when it lies within `tolerance` of it.
pub fn nearest_integer(value: f64, tolerance: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    let rounded = value.round();
    // i64 cannot hold anything outside this range; such values never hit a target
    if rounded.abs() >= 9.0e18 {
        return None;
    }

    if (value - rounded).abs() < tolerance {
        Some(rounded as i64)
    } else {
        None
    }
}

//! Circular angle normalization.

/// Normalize degrees into [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize degrees into [-180, 180).
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg + 180.0) - 180.0;
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Absolute circular separation between two angles, in [0, 180].
pub fn circular_distance(a: f64, b: f64) -> f64 {
    normalize_to_pm180(a - b).abs()
}

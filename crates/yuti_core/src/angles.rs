//! Angle helpers on the degree circle.

/// Wrap an angle in degrees to [0, 360).
pub fn wrap_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to (-180, +180].
///
/// Signed relative angles (e.g. a two-body longitude difference) must pass
/// through this before comparison, so the 0/360 wrap never shows up as a
/// spurious 360-degree jump.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

//! Angular span metric and conjunction predicate.
//!
//! The span of a set of longitudes is the smallest arc containing all of
//! them: the circle minus its largest empty arc. Sorting the angles and
//! taking 360 minus the largest gap between circular neighbours is exact for
//! any set, including sets that straddle the 0/360 wrap, so no signed
//! wraparound subtraction is needed here.

use yuti_core::angles::wrap_360;

/// Angular span of a set of longitudes, in degrees [0, 360).
///
/// Zero or one angle has span 0. Inputs are reduced mod 360 first, so the
/// result is invariant under rotating every angle by a common offset.
/// Inputs must be finite.
pub fn angle_span(angles: &[f64]) -> f64 {
    if angles.len() <= 1 {
        return 0.0;
    }

    let mut sorted: Vec<f64> = angles.iter().map(|&a| wrap_360(a)).collect();
    sorted.sort_by(f64::total_cmp);

    // Largest empty arc; the last-to-first gap wraps through 0/360.
    let mut max_gap = sorted[0] + 360.0 - sorted[sorted.len() - 1];
    for pair in sorted.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > max_gap {
            max_gap = gap;
        }
    }

    360.0 - max_gap
}

/// Conjunction predicate: true iff the span is strictly below the threshold.
///
/// Strict `<`, so a span exactly at the threshold is not a conjunction. The
/// boundary refiner uses the same convention: span - threshold is negative
/// exactly while conjoined.
pub fn is_conjoined(angles: &[f64], threshold_deg: f64) -> bool {
    angle_span(angles) < threshold_deg
}

//! Boundary refinement by bracketed bisection.
//!
//! Given two instants straddling a conjunction-predicate flip, bisects
//! f(t) = span(t) - threshold down to the configured tolerance. Derivative
//! free and guaranteed to converge when the bracket really straddles a sign
//! change; a bracket with no sign change is reported as a failure, never
//! swallowed.

use crate::conjunction_types::RefineFailure;
use crate::error::SearchError;

/// Result of refining one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refined {
    /// Crossing instant, accurate to the convergence tolerance.
    Crossing(f64),
    /// Bracket could not be refined; see the reason.
    Failed(RefineFailure),
}

/// Bisect the zero crossing of `f_at` between `t_a` and `t_b`.
///
/// `f_at` evaluates span minus threshold; negative means conjoined. Both
/// ends are evaluated up front: an endpoint exactly at zero already is the
/// crossing, and same-sign ends yield [`RefineFailure::NoSignChange`].
/// Errors from `f_at` (the longitude source) propagate as hard errors.
pub fn refine_crossing<F>(
    mut t_a: f64,
    mut t_b: f64,
    max_iterations: u32,
    convergence_days: f64,
    mut f_at: F,
) -> Result<Refined, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    let mut f_a = f_at(t_a)?;
    let f_b = f_at(t_b)?;

    if f_a == 0.0 {
        return Ok(Refined::Crossing(t_a));
    }
    if f_b == 0.0 {
        return Ok(Refined::Crossing(t_b));
    }
    if f_a * f_b > 0.0 {
        return Ok(Refined::Failed(RefineFailure::NoSignChange {
            f_before: f_a,
            f_after: f_b,
        }));
    }

    for _ in 0..max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            return Ok(Refined::Crossing(0.5 * (t_a + t_b)));
        }
    }

    Ok(Refined::Failed(RefineFailure::NoConvergence {
        width_days: (t_b - t_a).abs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuti_core::SourceError;

    fn ok<F: Fn(f64) -> f64>(f: F) -> impl FnMut(f64) -> Result<f64, SearchError> {
        move |t| Ok(f(t))
    }

    #[test]
    fn linear_crossing() {
        // f(t) = t - 3.25 crosses zero at 3.25.
        let result = refine_crossing(3.0, 4.0, 50, 1e-10, ok(|t| t - 3.25)).expect("no source error");
        let Refined::Crossing(t) = result else {
            panic!("expected crossing, got {result:?}");
        };
        assert!((t - 3.25).abs() < 1e-9, "t = {t}");
        assert!(t > 3.0 && t < 4.0);
    }

    #[test]
    fn descending_crossing() {
        let result =
            refine_crossing(0.0, 1.0, 50, 1e-12, ok(|t| 0.5 - t)).expect("no source error");
        let Refined::Crossing(t) = result else {
            panic!("expected crossing, got {result:?}");
        };
        assert!((t - 0.5).abs() < 1e-10, "t = {t}");
    }

    #[test]
    fn residual_small_at_crossing() {
        let f = |t: f64| 2.0 * t - 1.4;
        let result = refine_crossing(0.0, 1.0, 60, 1e-12, ok(f)).expect("no source error");
        let Refined::Crossing(t) = result else {
            panic!("expected crossing, got {result:?}");
        };
        assert!(f(t).abs() < 1e-10, "f(t) = {}", f(t));
    }

    #[test]
    fn endpoint_zero_is_crossing() {
        let result = refine_crossing(2.0, 3.0, 50, 1e-10, ok(|t| t - 2.0)).expect("no source error");
        assert_eq!(result, Refined::Crossing(2.0));
    }

    #[test]
    fn no_sign_change_reported() {
        // Positive at both ends (dips between them): a hidden double flip.
        let result =
            refine_crossing(0.0, 1.0, 50, 1e-10, ok(|t| (t - 0.5).powi(2) + 0.1))
                .expect("no source error");
        let Refined::Failed(RefineFailure::NoSignChange { f_before, f_after }) = result else {
            panic!("expected NoSignChange, got {result:?}");
        };
        assert!(f_before > 0.0 && f_after > 0.0);
    }

    #[test]
    fn iteration_budget_exhausted() {
        let result = refine_crossing(0.0, 1.0, 2, 1e-12, ok(|t| t - 0.123)).expect("no source error");
        let Refined::Failed(RefineFailure::NoConvergence { width_days }) = result else {
            panic!("expected NoConvergence, got {result:?}");
        };
        assert!(width_days > 1e-12);
    }

    #[test]
    fn source_error_propagates() {
        let result = refine_crossing(0.0, 1.0, 50, 1e-10, |_t| {
            Err(SearchError::Source(SourceError::EpochOutOfRange {
                jd_tdb: 0.0,
            }))
        });
        assert!(matches!(result, Err(SearchError::Source(_))));
    }
}

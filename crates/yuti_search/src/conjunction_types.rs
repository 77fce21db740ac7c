//! Types for conjunction window search.

use yuti_core::Body;

/// Which way the conjunction predicate flipped between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Span dropped below the threshold (window opens).
    Start,
    /// Span rose back to or above the threshold (window closes).
    End,
}

/// A predicate flip detected between two adjacent samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    /// Sample instant before the flip (JD TDB).
    pub jd_before: f64,
    /// Sample instant after the flip (JD TDB).
    pub jd_after: f64,
    /// Span at `jd_before` in degrees.
    pub span_before_deg: f64,
    /// Span at `jd_after` in degrees.
    pub span_after_deg: f64,
}

/// Why a bracket could not be refined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefineFailure {
    /// span - threshold has the same sign at both bracket ends: no single
    /// crossing lies inside, so the scan step was too coarse for this
    /// bracket.
    NoSignChange { f_before: f64, f_after: f64 },
    /// Iteration budget exhausted before the bracket reached tolerance.
    NoConvergence { width_days: f64 },
}

/// One boundary of a conjunction window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// Refined transition instant (JD TDB).
    Exact(f64),
    /// Scan-window edge: the conjunction was already (or still) active here,
    /// so the true transition lies outside the scanned range.
    Open(f64),
    /// Refinement failed; the coarse bracket is retained.
    Unresolved {
        jd_before: f64,
        jd_after: f64,
        reason: RefineFailure,
    },
}

impl Boundary {
    /// Best available instant, for ordering and display.
    pub fn jd(&self) -> f64 {
        match *self {
            Self::Exact(jd) | Self::Open(jd) => jd,
            Self::Unresolved {
                jd_before,
                jd_after,
                ..
            } => 0.5 * (jd_before + jd_after),
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// A detected conjunction window.
///
/// Immutable once built. The span stays strictly below the threshold at
/// every sampled instant between `start` and `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConjunctionInterval {
    /// Tracked bodies, in the caller's order.
    pub bodies: Vec<Body>,
    pub start: Boundary,
    pub end: Boundary,
    /// Minimum span observed at the coarse samples inside the window.
    pub min_span_deg: f64,
}

impl ConjunctionInterval {
    /// Both boundaries refined to exact instants.
    pub fn is_fully_resolved(&self) -> bool {
        self.start.is_exact() && self.end.is_exact()
    }

    /// Window length in days, from the best available boundary instants.
    pub fn duration_days(&self) -> f64 {
        self.end.jd() - self.start.jd()
    }
}

/// Configuration for conjunction window search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Conjunction threshold in degrees, in (0, 360]. A window is open while
    /// the span is strictly below this value.
    pub threshold_deg: f64,
    /// Coarse scan step size in days. Windows that open and close between
    /// two samples are missed; smaller steps trade work for resolution.
    pub step_size_days: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-8, ~0.86 ms).
    pub convergence_days: f64,
}

impl ScanConfig {
    pub fn new(threshold_deg: f64, step_size_days: f64) -> Self {
        Self {
            threshold_deg,
            step_size_days,
            max_iterations: 50,
            convergence_days: 1e-8,
        }
    }

    /// Daily sampling, the classic planetary-grouping setup.
    pub fn daily(threshold_deg: f64) -> Self {
        Self::new(threshold_deg, 1.0)
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.threshold_deg.is_finite()
            || self.threshold_deg <= 0.0
            || self.threshold_deg > 360.0
        {
            return Err("threshold_deg must be in (0, 360]");
        }
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let c = ScanConfig::daily(45.0);
        assert!((c.threshold_deg - 45.0).abs() < 1e-10);
        assert!((c.step_size_days - 1.0).abs() < 1e-10);
        assert_eq!(c.max_iterations, 50);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_threshold() {
        let c = ScanConfig::daily(0.0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_over_full_circle() {
        let c = ScanConfig::daily(360.5);
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_accepts_full_circle() {
        let c = ScanConfig::daily(360.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_step() {
        let c = ScanConfig::new(45.0, 0.0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_negative_step() {
        let c = ScanConfig::new(45.0, -1.0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_iterations() {
        let mut c = ScanConfig::daily(45.0);
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_convergence() {
        let mut c = ScanConfig::daily(45.0);
        c.convergence_days = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn boundary_jd() {
        assert!((Boundary::Exact(10.0).jd() - 10.0).abs() < 1e-12);
        assert!((Boundary::Open(5.0).jd() - 5.0).abs() < 1e-12);
        let b = Boundary::Unresolved {
            jd_before: 4.0,
            jd_after: 6.0,
            reason: RefineFailure::NoConvergence { width_days: 2.0 },
        };
        assert!((b.jd() - 5.0).abs() < 1e-12);
        assert!(!b.is_exact());
    }

    #[test]
    fn interval_resolution_and_duration() {
        let iv = ConjunctionInterval {
            bodies: vec![Body::Jupiter, Body::Saturn],
            start: Boundary::Exact(100.0),
            end: Boundary::Exact(130.0),
            min_span_deg: 3.0,
        };
        assert!(iv.is_fully_resolved());
        assert!((iv.duration_days() - 30.0).abs() < 1e-12);

        let open = ConjunctionInterval {
            start: Boundary::Open(100.0),
            ..iv
        };
        assert!(!open.is_fully_resolved());
    }
}

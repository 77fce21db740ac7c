//! Fixed-step span scan and the top-level conjunction search driver.
//!
//! The scan walks the requested range at a constant step, evaluates the
//! angular span of the body set at each instant, and records every flip of
//! the conjunction predicate between adjacent samples. Only the previous
//! sample's span is carried between steps.

use yuti_core::{Body, LongitudeSource};

use crate::conjunction_types::{
    Boundary, ConjunctionInterval, ScanConfig, Transition, TransitionKind,
};
use crate::error::SearchError;
use crate::refine::{Refined, refine_crossing};
use crate::report::assemble_intervals;
use crate::span::angle_span;

/// Output of the coarse scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Predicate flips in time order; kinds strictly alternate.
    pub transitions: Vec<Transition>,
    /// Conjunction already active at the first sample.
    pub conjoined_at_start: bool,
    /// Conjunction still active at the last sample.
    pub conjoined_at_end: bool,
    /// Minimum sampled span per conjoined segment, in time order. One entry
    /// per End transition, plus one if still conjoined at the last sample.
    pub segment_min_spans: Vec<f64>,
}

/// Evaluate the span of the body set at one instant.
fn span_at<S: LongitudeSource>(
    source: &S,
    bodies: &[Body],
    jd_tdb: f64,
    buf: &mut Vec<f64>,
) -> Result<f64, SearchError> {
    buf.clear();
    for &body in bodies {
        buf.push(source.ecliptic_longitude_deg(body, jd_tdb)?);
    }
    Ok(angle_span(buf))
}

fn validate_request(
    bodies: &[Body],
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
) -> Result<(), SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if bodies.is_empty() {
        return Err(SearchError::InvalidConfig("bodies must not be empty"));
    }
    if !jd_start.is_finite() || !jd_end.is_finite() || jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("jd_end must be after jd_start"));
    }
    Ok(())
}

/// Walk `[jd_start, jd_end]` at the configured step and detect every
/// conjunction-predicate flip between adjacent samples.
///
/// No transition is reported at the first sample (there is no predecessor
/// to compare against); a conjunction already in progress there surfaces
/// via `conjoined_at_start` instead. A window that both opens and closes
/// strictly between two samples is missed; choosing the step is the
/// caller's accuracy/cost tradeoff, not a scanner defect.
pub fn scan_spans<S: LongitudeSource>(
    source: &S,
    bodies: &[Body],
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
) -> Result<ScanOutcome, SearchError> {
    validate_request(bodies, jd_start, jd_end, config)?;

    let threshold = config.threshold_deg;
    let mut buf = Vec::with_capacity(bodies.len());

    let mut span_prev = span_at(source, bodies, jd_start, &mut buf)?;
    let mut t_prev = jd_start;
    let mut conjoined = span_prev < threshold;

    let conjoined_at_start = conjoined;
    let mut transitions = Vec::new();
    let mut segment_min_spans = Vec::new();
    let mut current_min = if conjoined { span_prev } else { f64::INFINITY };

    loop {
        let t_curr = (t_prev + config.step_size_days).min(jd_end);
        let span_curr = span_at(source, bodies, t_curr, &mut buf)?;
        let now_conjoined = span_curr < threshold;

        match (conjoined, now_conjoined) {
            (false, true) => {
                transitions.push(Transition {
                    kind: TransitionKind::Start,
                    jd_before: t_prev,
                    jd_after: t_curr,
                    span_before_deg: span_prev,
                    span_after_deg: span_curr,
                });
                current_min = span_curr;
            }
            (true, false) => {
                transitions.push(Transition {
                    kind: TransitionKind::End,
                    jd_before: t_prev,
                    jd_after: t_curr,
                    span_before_deg: span_prev,
                    span_after_deg: span_curr,
                });
                segment_min_spans.push(current_min);
                current_min = f64::INFINITY;
            }
            (true, true) => {
                if span_curr < current_min {
                    current_min = span_curr;
                }
            }
            (false, false) => {}
        }

        conjoined = now_conjoined;
        span_prev = span_curr;
        t_prev = t_curr;

        if t_curr >= jd_end {
            break;
        }
    }

    if conjoined {
        segment_min_spans.push(current_min);
    }

    Ok(ScanOutcome {
        transitions,
        conjoined_at_start,
        conjoined_at_end: conjoined,
        segment_min_spans,
    })
}

/// Search for all conjunction windows in `[jd_start, jd_end]`.
///
/// Each detected transition bracket is refined by bisection down to
/// `config.convergence_days`. Refinement failures are isolated per
/// boundary: the affected window keeps its coarse bracket as
/// [`Boundary::Unresolved`] and every other window is still reported.
/// Longitude-source failures abort the whole search.
pub fn search_conjunctions<S: LongitudeSource>(
    source: &S,
    bodies: &[Body],
    jd_start: f64,
    jd_end: f64,
    config: &ScanConfig,
) -> Result<Vec<ConjunctionInterval>, SearchError> {
    let outcome = scan_spans(source, bodies, jd_start, jd_end, config)?;

    let mut buf = Vec::with_capacity(bodies.len());
    let mut refined = Vec::with_capacity(outcome.transitions.len());
    for transition in &outcome.transitions {
        let crossing = refine_crossing(
            transition.jd_before,
            transition.jd_after,
            config.max_iterations,
            config.convergence_days,
            |t| Ok(span_at(source, bodies, t, &mut buf)? - config.threshold_deg),
        )?;
        refined.push(match crossing {
            Refined::Crossing(jd) => Boundary::Exact(jd),
            Refined::Failed(reason) => Boundary::Unresolved {
                jd_before: transition.jd_before,
                jd_after: transition.jd_after,
                reason,
            },
        });
    }

    Ok(assemble_intervals(
        bodies, &outcome, &refined, jd_start, jd_end,
    ))
}

//! Assembly of refined transitions into conjunction windows.

use yuti_core::Body;

use crate::conjunction_types::{Boundary, ConjunctionInterval, TransitionKind};
use crate::scan::ScanOutcome;

/// Pair the alternating Start/End sequence into intervals.
///
/// `refined` holds one boundary per scan transition, in the same order. A
/// leading End closes a window that was already open at `jd_start`; a
/// trailing Start leaves a window open at `jd_end`. Both cases are emitted
/// with a [`Boundary::Open`] edge, never dropped.
pub fn assemble_intervals(
    bodies: &[Body],
    outcome: &ScanOutcome,
    refined: &[Boundary],
    jd_start: f64,
    jd_end: f64,
) -> Vec<ConjunctionInterval> {
    let mut intervals = Vec::new();
    let mut min_spans = outcome.segment_min_spans.iter().copied();
    let mut open_start: Option<Boundary> = outcome
        .conjoined_at_start
        .then_some(Boundary::Open(jd_start));

    for (transition, boundary) in outcome.transitions.iter().zip(refined) {
        match transition.kind {
            TransitionKind::Start => {
                open_start = Some(*boundary);
            }
            TransitionKind::End => {
                if let Some(start) = open_start.take() {
                    intervals.push(ConjunctionInterval {
                        bodies: bodies.to_vec(),
                        start,
                        end: *boundary,
                        min_span_deg: min_spans.next().unwrap_or(f64::INFINITY),
                    });
                }
            }
        }
    }

    if let Some(start) = open_start {
        intervals.push(ConjunctionInterval {
            bodies: bodies.to_vec(),
            start,
            end: Boundary::Open(jd_end),
            min_span_deg: min_spans.next().unwrap_or(f64::INFINITY),
        });
    }

    intervals
}

//! Conjunction window search engine.
//!
//! Finds the intervals during which a set of bodies' geocentric ecliptic
//! longitudes all fit inside an arc narrower than a configured threshold,
//! and refines the exact instants each window opens and closes.
//!
//! Algorithm: coarse fixed-step scan of the angular span (smallest arc
//! containing every body), transition detection between adjacent samples,
//! then bisection on span(t) - threshold over each bracketing sample pair.
//! Positions come from any [`yuti_core::LongitudeSource`].
//!
//! The scan keeps O(1) state between consecutive samples, so disjoint time
//! ranges can be searched independently; shards must overlap by at least one
//! step or a transition straddling the shard boundary is lost.

pub mod conjunction_types;
pub mod error;
pub mod refine;
pub mod report;
pub mod scan;
pub mod span;

pub use conjunction_types::{
    Boundary, ConjunctionInterval, RefineFailure, ScanConfig, Transition, TransitionKind,
};
pub use error::SearchError;
pub use refine::{Refined, refine_crossing};
pub use scan::{ScanOutcome, scan_spans, search_conjunctions};
pub use span::{angle_span, is_conjoined};

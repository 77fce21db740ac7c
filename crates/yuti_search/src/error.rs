//! Error types for conjunction search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use yuti_core::SourceError;

/// Errors that abort a conjunction search.
///
/// Per-boundary refinement failures are not here: they are isolated into
/// [`crate::Boundary::Unresolved`] so one bad bracket cannot sink a
/// multi-century scan.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Configuration rejected before any sampling.
    InvalidConfig(&'static str),
    /// The longitude source failed; no positional data for that instant.
    Source(SourceError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Source(e) => write!(f, "longitude source error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<SourceError> for SearchError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

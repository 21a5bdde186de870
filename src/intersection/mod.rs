//! Pairwise line intersection with geometric plausibility gates.
//!
//! Every unordered pair of segments in a frame is intersected analytically
//! from the slope-intercept form of the supporting lines. A pair is skipped
//! when either segment is vertical, when the slopes are parallel, or when
//! either line's angle falls outside the symmetric band
//! `(min, max) ∪ (-max, -min)`. Surviving pairs each emit one candidate point;
//! candidates are not deduplicated.
//!
//! Degenerate geometry is filtered silently. The only feedback is the
//! per-frame [`IntersectionDiagnostics`] counters.
mod engine;
mod params;

pub use engine::{IntersectionDiagnostics, IntersectionEngine, PairOutcome};
pub use params::IntersectionParams;

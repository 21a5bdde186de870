use super::params::IntersectionParams;
use crate::angle::AngleBand;
use crate::types::{LineSegment, Point2D};
use log::trace;
use serde::Serialize;

/// Result of intersecting a single segment pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PairOutcome {
    Intersection(Point2D),
    /// At least one segment has zero x-extent.
    Vertical,
    Parallel,
    /// At least one line is too shallow or too steep.
    OutsideAngleBand,
}

/// Per-frame counters of the pair gates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionDiagnostics {
    pub pairs: usize,
    pub vertical: usize,
    pub parallel: usize,
    pub outside_angle_band: usize,
    pub candidates: usize,
}

impl IntersectionDiagnostics {
    fn record(&mut self, outcome: &PairOutcome) {
        self.pairs += 1;
        match outcome {
            PairOutcome::Intersection(_) => self.candidates += 1,
            PairOutcome::Vertical => self.vertical += 1,
            PairOutcome::Parallel => self.parallel += 1,
            PairOutcome::OutsideAngleBand => self.outside_angle_band += 1,
        }
    }
}

/// Enumerates segment pairs of a frame and emits candidate intersections.
#[derive(Clone, Debug)]
pub struct IntersectionEngine {
    params: IntersectionParams,
    band: AngleBand,
}

impl Default for IntersectionEngine {
    fn default() -> Self {
        Self::new(IntersectionParams::default())
    }
}

impl IntersectionEngine {
    pub fn new(params: IntersectionParams) -> Self {
        Self {
            band: params.angle_band(),
            params,
        }
    }

    /// Candidate points for all pairs `(i, j)`, `i < j`, that pass the gates.
    pub fn compute_candidates(&self, segments: &[LineSegment]) -> Vec<Point2D> {
        self.compute_candidates_with_diagnostics(segments).0
    }

    pub fn compute_candidates_with_diagnostics(
        &self,
        segments: &[LineSegment],
    ) -> (Vec<Point2D>, IntersectionDiagnostics) {
        let mut diag = IntersectionDiagnostics::default();
        let n = segments.len();
        let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let outcome = self.intersect_pair(&segments[i], &segments[j]);
                diag.record(&outcome);
                match outcome {
                    PairOutcome::Intersection(p) => candidates.push(p),
                    skipped => trace!("pair ({i}, {j}) skipped: {skipped:?}"),
                }
            }
        }
        (candidates, diag)
    }

    /// Applies the vertical, parallel and angle gates, in that order, then
    /// intersects the two supporting lines.
    pub fn intersect_pair(&self, a: &LineSegment, b: &LineSegment) -> PairOutcome {
        let (Some((m1, b1)), Some((m2, b2))) = (a.slope_intercept(), b.slope_intercept()) else {
            return PairOutcome::Vertical;
        };
        if self.is_parallel(m1, m2) {
            return PairOutcome::Parallel;
        }
        if !(self.band.contains_slope(m1) && self.band.contains_slope(m2)) {
            return PairOutcome::OutsideAngleBand;
        }
        let x = (b2 - b1) / (m1 - m2);
        let y = m1 * x + b1;
        PairOutcome::Intersection(Point2D::new(x, y))
    }

    #[inline]
    fn is_parallel(&self, m1: f64, m2: f64) -> bool {
        if self.params.parallel_tolerance > 0.0 {
            (m1 - m2).abs() <= self.params.parallel_tolerance
        } else {
            m1 == m2
        }
    }
}

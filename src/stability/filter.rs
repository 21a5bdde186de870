use super::params::StabilityParams;
use super::window::{HistoryWindow, WindowStats};
use crate::output::LatestCoordinate;
use crate::types::Point2D;
use log::{debug, trace, warn};
use nalgebra::Vector2;
use serde::Serialize;
use std::sync::Arc;

/// Decision taken for a single candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AcceptOutcome {
    Accepted,
    OutOfRegion,
    /// The window spread with the candidate included.
    SpreadExceeded { std_dev: Vector2<f64> },
}

impl AcceptOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, AcceptOutcome::Accepted)
    }
}

/// Counts of filter decisions, typically accumulated over one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDiagnostics {
    pub candidates: usize,
    pub out_of_region: usize,
    pub spread_rejected: usize,
    pub accepted: usize,
}

impl FilterDiagnostics {
    pub fn record(&mut self, outcome: &AcceptOutcome) {
        self.candidates += 1;
        match outcome {
            AcceptOutcome::Accepted => self.accepted += 1,
            AcceptOutcome::OutOfRegion => self.out_of_region += 1,
            AcceptOutcome::SpreadExceeded { .. } => self.spread_rejected += 1,
        }
    }
}

/// Stateful gate turning candidate points into the latest stable coordinate.
///
/// Owns the history window exclusively. The latest coordinate is shared with
/// the output path through [`latest`](Self::latest).
#[derive(Debug)]
pub struct StabilityFilter {
    params: StabilityParams,
    window: HistoryWindow,
    latest: Arc<LatestCoordinate>,
    last_accepted: Option<Point2D>,
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new(StabilityParams::default())
    }
}

impl StabilityFilter {
    pub fn new(params: StabilityParams) -> Self {
        Self::with_initial(params, 0.0)
    }

    /// Filter whose latest coordinate starts at `initial`.
    pub fn with_initial(params: StabilityParams, initial: f64) -> Self {
        Self {
            window: HistoryWindow::new(params.capacity),
            params,
            latest: Arc::new(LatestCoordinate::new(initial)),
            last_accepted: None,
        }
    }

    pub fn params(&self) -> &StabilityParams {
        &self.params
    }

    /// Shared handle for the output path.
    pub fn latest(&self) -> Arc<LatestCoordinate> {
        Arc::clone(&self.latest)
    }

    pub fn latest_x(&self) -> f64 {
        self.latest.get()
    }

    pub fn last_accepted(&self) -> Option<Point2D> {
        self.last_accepted
    }

    pub fn window(&self) -> &HistoryWindow {
        &self.window
    }

    pub fn stats(&self) -> WindowStats {
        self.window.stats()
    }

    /// Returns whether `point` was durably accepted.
    pub fn accept(&mut self, point: Point2D) -> bool {
        self.evaluate(point).is_accepted()
    }

    /// Runs both gates and commits the point only when it passes.
    pub fn evaluate(&mut self, point: Point2D) -> AcceptOutcome {
        if !self.params.region.contains(&point) {
            trace!("candidate ({:.2}, {:.2}) outside region", point.x, point.y);
            return AcceptOutcome::OutOfRegion;
        }

        let stats = self.window.prospective_stats(&point);
        if stats.exceeds(self.params.desired_std_dev) {
            warn!(
                "std dev ({:.2}, {:.2}) exceeds {:.2}, skipping ({:.2}, {:.2})",
                stats.std_dev.x,
                stats.std_dev.y,
                self.params.desired_std_dev,
                point.x,
                point.y
            );
            return AcceptOutcome::SpreadExceeded {
                std_dev: stats.std_dev,
            };
        }

        self.window.push(point);
        self.latest.set(point.x);
        self.last_accepted = Some(point);
        debug!("intersection accepted: ({:.2}, {:.2})", point.x, point.y);
        AcceptOutcome::Accepted
    }
}

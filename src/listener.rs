//! Event-driven consumer of segment batches.
//!
//! [`LineListener::on_frame`] runs one frame to completion: all pair
//! intersections, then every candidate through the stability filter in
//! emission order. [`run_threaded`] pairs it with the fixed-rate
//! [`OutputLoop`] on a second thread; the two communicate only through the
//! shared [`LatestCoordinate`].
use crate::diagnostics::FrameReport;
use crate::intersection::{IntersectionEngine, IntersectionParams};
use crate::output::{CoordinatePublisher, LatestCoordinate, OutputLoop, OutputParams};
use crate::stability::{FilterDiagnostics, StabilityFilter, StabilityParams};
use crate::types::LineSegment;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Listener-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerParams {
    pub intersection: IntersectionParams,
    pub stability: StabilityParams,
    pub output: OutputParams,
}

impl ListenerParams {
    pub fn validate(&self) -> Result<(), String> {
        self.intersection.validate()?;
        self.stability.validate()?;
        self.output.validate()
    }
}

/// Intersection engine and stability filter evaluated back to back per frame.
#[derive(Debug)]
pub struct LineListener {
    params: ListenerParams,
    engine: IntersectionEngine,
    filter: StabilityFilter,
    frames: usize,
}

impl Default for LineListener {
    fn default() -> Self {
        Self::new(ListenerParams::default())
    }
}

impl LineListener {
    pub fn new(params: ListenerParams) -> Self {
        Self {
            engine: IntersectionEngine::new(params.intersection),
            filter: StabilityFilter::with_initial(params.stability, params.output.initial_value),
            params,
            frames: 0,
        }
    }

    pub fn params(&self) -> &ListenerParams {
        &self.params
    }

    pub fn filter(&self) -> &StabilityFilter {
        &self.filter
    }

    /// Shared handle for the output path.
    pub fn latest(&self) -> Arc<LatestCoordinate> {
        self.filter.latest()
    }

    pub fn frames_processed(&self) -> usize {
        self.frames
    }

    /// Processes one batch. Never fails; rejected geometry is only counted.
    pub fn on_frame(&mut self, segments: &[LineSegment]) -> FrameReport {
        let start = Instant::now();
        let frame_index = self.frames;
        self.frames += 1;

        if segments.is_empty() {
            warn!("empty lines array (frame {frame_index})");
            return FrameReport {
                frame_index,
                latest_x: self.filter.latest_x(),
                ..Default::default()
            };
        }

        let (candidates, intersection) = self.engine.compute_candidates_with_diagnostics(segments);
        let mut filter = FilterDiagnostics::default();
        let mut accepted = Vec::new();
        for p in candidates {
            let outcome = self.filter.evaluate(p);
            filter.record(&outcome);
            if outcome.is_accepted() {
                accepted.push(p);
            }
        }

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "frame {}: segs={} pairs={} candidates={} accepted={} latest_x={:.3} elapsed_ms={:.3}",
            frame_index,
            segments.len(),
            intersection.pairs,
            intersection.candidates,
            filter.accepted,
            self.filter.latest_x(),
            elapsed_ms
        );
        FrameReport {
            frame_index,
            segments: segments.len(),
            intersection,
            filter,
            accepted,
            latest_x: self.filter.latest_x(),
            elapsed_ms,
        }
    }
}

/// Result of [`run_threaded`].
pub struct ThreadedRun<P> {
    pub frames: Vec<FrameReport>,
    pub ticks: u64,
    pub publisher: P,
}

/// Clears the output loop's run flag when ingestion ends, including on panic.
struct StopOnDrop<'a>(&'a AtomicBool);

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Drains `frames` through `listener` on a worker thread while the output
/// loop publishes on the calling thread.
///
/// Returns once the sender side of `frames` is dropped and every queued batch
/// has been processed. One final tick is published after ingestion stops, so
/// the last accepted coordinate is always emitted. Invalid listener
/// parameters are reported before any thread is started.
pub fn run_threaded<P>(
    mut listener: LineListener,
    frames: Receiver<Vec<LineSegment>>,
    publisher: P,
) -> Result<ThreadedRun<P>, String>
where
    P: CoordinatePublisher,
{
    listener.params().validate()?;
    let running = AtomicBool::new(true);
    let mut output = OutputLoop::new(listener.latest(), publisher, &listener.params().output);

    let reports = thread::scope(|scope| {
        let running_flag = &running;
        let listener = &mut listener;
        let ingest = scope.spawn(move || {
            let _stop = StopOnDrop(running_flag);
            let mut reports = Vec::new();
            for batch in frames {
                reports.push(listener.on_frame(&batch));
            }
            reports
        });
        output.run(&running);
        ingest
            .join()
            .map_err(|_| "ingestion thread panicked".to_string())
    })?;

    output.tick();
    Ok(ThreadedRun {
        frames: reports,
        ticks: output.ticks(),
        publisher: output.into_publisher(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point2D;
    use std::sync::mpsc;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::from_coords(x1, y1, x2, y2)
    }

    #[test]
    fn empty_frame_is_a_no_op() {
        let mut l = LineListener::default();
        let report = l.on_frame(&[]);
        assert!(report.is_empty_frame());
        assert_eq!(report.intersection.pairs, 0);
        assert_eq!(report.latest_x, 0.0);
        assert_eq!(l.frames_processed(), 1);
    }

    #[test]
    fn crossing_pair_updates_latest() {
        let mut l = LineListener::default();
        let report = l.on_frame(&[
            seg(600.0, 450.0, 620.0, 470.0),
            seg(600.0, 550.0, 650.0, 500.0),
        ]);
        assert_eq!(report.filter.accepted, 1);
        assert_eq!(report.accepted, vec![Point2D::new(650.0, 500.0)]);
        assert_eq!(l.latest().get(), 650.0);
    }

    #[test]
    fn out_of_region_intersection_is_counted_not_accepted() {
        let mut l = LineListener::default();
        let report = l.on_frame(&[seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)]);
        assert_eq!(report.intersection.candidates, 1);
        assert_eq!(report.filter.out_of_region, 1);
        assert!(report.accepted.is_empty());
        assert!(l.filter().window().is_empty());
    }

    #[test]
    fn threaded_run_rejects_invalid_params() {
        let bad_rates = [0.0, -5.0, f64::NAN];
        for rate_hz in bad_rates {
            let listener = LineListener::new(ListenerParams {
                output: OutputParams {
                    rate_hz,
                    ..Default::default()
                },
                ..Default::default()
            });
            // Sender kept alive: an unvalidated run would never return.
            let (_tx, rx) = mpsc::channel::<Vec<LineSegment>>();
            let result = run_threaded(listener, rx, |_v: f64| {});
            assert!(result.is_err(), "rate_hz={rate_hz} should be rejected");
        }

        let listener = LineListener::new(ListenerParams {
            stability: StabilityParams {
                desired_std_dev: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        });
        let (_tx, rx) = mpsc::channel::<Vec<LineSegment>>();
        let err = run_threaded(listener, rx, |_v: f64| {}).err().unwrap();
        assert!(err.contains("desired_std_dev"), "unexpected error: {err}");

        let listener = LineListener::new(ListenerParams {
            stability: StabilityParams {
                capacity: 0,
                ..Default::default()
            },
            ..Default::default()
        });
        let (_tx, rx) = mpsc::channel::<Vec<LineSegment>>();
        assert!(run_threaded(listener, rx, |_v: f64| {}).is_err());
    }

    #[test]
    fn threaded_run_publishes_last_accepted_value() {
        let listener = LineListener::new(ListenerParams {
            output: OutputParams {
                rate_hz: 100.0,
                ..Default::default()
            },
            ..Default::default()
        });
        let (tx, rx) = mpsc::channel();
        tx.send(vec![]).unwrap();
        tx.send(vec![
            seg(600.0, 450.0, 620.0, 470.0),
            seg(600.0, 550.0, 650.0, 500.0),
        ])
        .unwrap();
        drop(tx);

        let mut published: Vec<f64> = Vec::new();
        let run = run_threaded(listener, rx, |v: f64| published.push(v)).unwrap();
        assert_eq!(run.frames.len(), 2);
        assert!(run.ticks >= 1);
        drop(run);
        assert_eq!(published.last().copied(), Some(650.0));
    }
}

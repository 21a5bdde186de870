//! Serializable reports of listener runs.
use crate::intersection::IntersectionDiagnostics;
use crate::listener::ListenerParams;
use crate::stability::FilterDiagnostics;
use crate::types::Point2D;
use serde::Serialize;

/// Outcome of processing one segment batch.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: usize,
    pub segments: usize,
    pub intersection: IntersectionDiagnostics,
    pub filter: FilterDiagnostics,
    pub accepted: Vec<Point2D>,
    /// Latest stable coordinate after this frame.
    pub latest_x: f64,
    pub elapsed_ms: f64,
}

impl FrameReport {
    pub fn is_empty_frame(&self) -> bool {
        self.segments == 0
    }
}

/// Aggregate of a full replay: per-frame reports and every published sample.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub params: ListenerParams,
    pub frames: Vec<FrameReport>,
    pub published: Vec<f64>,
    pub totals: RunTotals,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTotals {
    pub frames: usize,
    pub empty_frames: usize,
    pub candidates: usize,
    pub accepted: usize,
    pub out_of_region: usize,
    pub spread_rejected: usize,
}

impl RunReport {
    pub fn new(params: ListenerParams, frames: Vec<FrameReport>, published: Vec<f64>) -> Self {
        let totals = frames.iter().fold(RunTotals::default(), |mut t, f| {
            t.frames += 1;
            t.empty_frames += usize::from(f.is_empty_frame());
            t.candidates += f.intersection.candidates;
            t.accepted += f.filter.accepted;
            t.out_of_region += f.filter.out_of_region;
            t.spread_rejected += f.filter.spread_rejected;
            t
        });
        Self {
            params,
            frames,
            published,
            totals,
        }
    }

    pub fn print_text_summary(&self) {
        let t = &self.totals;
        println!(
            "frames={} empty={} candidates={} accepted={} out_of_region={} spread_rejected={}",
            t.frames, t.empty_frames, t.candidates, t.accepted, t.out_of_region, t.spread_rejected
        );
        if let Some(last) = self.published.last() {
            println!("published {} samples, last x={:.3}", self.published.len(), last);
        }
    }
}

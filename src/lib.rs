#![doc = include_str!("../README.md")]

// Core pipeline
pub mod intersection;
pub mod listener;
pub mod output;
pub mod stability;
pub mod types;

// Supporting modules
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::intersection::{IntersectionEngine, IntersectionParams};
pub use crate::listener::{run_threaded, LineListener, ListenerParams};
pub use crate::output::{CoordinatePublisher, LatestCoordinate, OutputLoop, OutputParams};
pub use crate::stability::{SpatialRegion, StabilityFilter, StabilityParams};
pub use crate::types::{LineSegment, Point2D};

pub use crate::diagnostics::{FrameReport, RunReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use vp_listener::prelude::*;
///
/// let mut listener = LineListener::new(ListenerParams::default());
/// let report = listener.on_frame(&[
///     LineSegment::from_coords(600.0, 450.0, 620.0, 470.0),
///     LineSegment::from_coords(600.0, 550.0, 650.0, 500.0),
/// ]);
/// assert_eq!(report.filter.accepted, 1);
/// assert_eq!(listener.latest().get(), 650.0);
/// ```
pub mod prelude {
    pub use crate::types::{LineSegment, Point2D};
    pub use crate::{LineListener, ListenerParams, OutputLoop};
}

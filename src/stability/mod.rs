//! Outlier rejection over a bounded history of accepted intersection points.
//!
//! A candidate passes two gates before it becomes the latest stable
//! coordinate:
//! - Spatial gate: the point must lie inside the trusted [`SpatialRegion`]
//!   (bounds inclusive).
//! - Spread gate: with the point appended to the FIFO [`HistoryWindow`]
//!   (evicting the oldest entry when over capacity), the population standard
//!   deviation of neither x nor y may exceed `desired_std_dev`.
//!
//! The spread gate is evaluated on the prospective window before anything is
//! committed, so a rejected point never becomes visible in the window and
//! never displaces an older entry.
mod filter;
mod params;
mod window;

pub use filter::{AcceptOutcome, FilterDiagnostics, StabilityFilter};
pub use params::{SpatialRegion, StabilityParams};
pub use window::{HistoryWindow, WindowStats};

//! Fixed-cadence output path.
//!
//! The per-frame processing path writes the latest stable coordinate into a
//! [`LatestCoordinate`]; an [`OutputLoop`] samples it at a fixed rate and
//! hands each sample to a [`CoordinatePublisher`]. The two sides share
//! nothing else. Every tick publishes the last known value, whether or not a
//! new frame arrived in between.
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Lock-free shared scalar holding the x of the most recently accepted point.
#[derive(Debug)]
pub struct LatestCoordinate {
    bits: AtomicU64,
}

impl LatestCoordinate {
    pub fn new(initial: f64) -> Self {
        Self {
            bits: AtomicU64::new(initial.to_bits()),
        }
    }

    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    #[inline]
    pub(crate) fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }
}

impl Default for LatestCoordinate {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Sink for sampled coordinates (a topic, a socket, a test buffer).
pub trait CoordinatePublisher {
    fn publish(&mut self, value: f64);
}

impl<F> CoordinatePublisher for F
where
    F: FnMut(f64),
{
    fn publish(&mut self, value: f64) {
        (self)(value)
    }
}

/// Parameters of the output path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputParams {
    /// Publishing cadence in Hz.
    pub rate_hz: f64,
    /// Value published before any point has been accepted.
    pub initial_value: f64,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            rate_hz: 10.0,
            initial_value: 0.0,
        }
    }
}

impl OutputParams {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.rate_hz.is_finite() && self.rate_hz > 0.0) {
            return Err(format!(
                "output rate must be positive and finite, got {}",
                self.rate_hz
            ));
        }
        Ok(())
    }
}

/// Sleeps so that successive [`sleep`](Rate::sleep) calls return at a fixed
/// period. An overrun re-anchors the schedule instead of bursting.
#[derive(Debug)]
pub struct Rate {
    period: Duration,
    next: Instant,
}

impl Rate {
    /// `hz` must be positive and finite.
    pub fn new(hz: f64) -> Self {
        let period = Duration::from_secs_f64(1.0 / hz);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns `false` when the deadline had already passed.
    pub fn sleep(&mut self) -> bool {
        let now = Instant::now();
        let on_time = now < self.next;
        if on_time {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
        on_time
    }
}

/// Timer-driven producer publishing the latest coordinate once per tick.
pub struct OutputLoop<P> {
    latest: Arc<LatestCoordinate>,
    publisher: P,
    rate_hz: f64,
    ticks: u64,
}

impl<P: CoordinatePublisher> OutputLoop<P> {
    pub fn new(latest: Arc<LatestCoordinate>, publisher: P, params: &OutputParams) -> Self {
        Self {
            latest,
            publisher,
            rate_hz: params.rate_hz,
            ticks: 0,
        }
    }

    /// Samples and publishes once, returning the published value.
    pub fn tick(&mut self) -> f64 {
        let value = self.latest.get();
        self.publisher.publish(value);
        self.ticks += 1;
        value
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ticks at the configured rate while `running` is set. Returns the
    /// number of ticks performed by this call.
    pub fn run(&mut self, running: &AtomicBool) -> u64 {
        let start = self.ticks;
        let mut rate = Rate::new(self.rate_hz);
        while running.load(Ordering::Relaxed) {
            self.tick();
            if !rate.sleep() {
                debug!(
                    "output loop overran its {:.1} ms period",
                    rate.period().as_secs_f64() * 1000.0
                );
            }
        }
        self.ticks - start
    }

    pub fn into_publisher(self) -> P {
        self.publisher
    }
}

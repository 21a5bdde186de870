use crate::types::Point2D;
use nalgebra::Vector2;
use serde::Serialize;
use std::collections::VecDeque;

/// Mean and population standard deviation of a set of points, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStats {
    pub count: usize,
    pub mean: Vector2<f64>,
    pub std_dev: Vector2<f64>,
}

impl WindowStats {
    /// Two-pass mean/variance over `points`. Empty input yields zeros.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point2D>,
        I::IntoIter: Clone,
    {
        let iter = points.into_iter();
        let mut count = 0usize;
        let mut sum = Vector2::<f64>::zeros();
        for p in iter.clone() {
            sum += p.coords;
            count += 1;
        }
        if count == 0 {
            return Self {
                count,
                mean: Vector2::zeros(),
                std_dev: Vector2::zeros(),
            };
        }
        let n = count as f64;
        let mean = sum / n;
        let mut sq = Vector2::<f64>::zeros();
        for p in iter {
            let d = p.coords - mean;
            sq += d.component_mul(&d);
        }
        Self {
            count,
            mean,
            std_dev: (sq / n).map(f64::sqrt),
        }
    }

    /// True when either axis spreads beyond `limit`.
    #[inline]
    pub fn exceeds(&self, limit: f64) -> bool {
        self.std_dev.x > limit || self.std_dev.y > limit
    }
}

/// Bounded FIFO of accepted points.
#[derive(Clone, Debug)]
pub struct HistoryWindow {
    points: VecDeque<Point2D>,
    capacity: usize,
}

impl HistoryWindow {
    /// `capacity` is clamped to at least one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Point2D> + Clone + '_ {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<&Point2D> {
        self.points.back()
    }

    pub fn stats(&self) -> WindowStats {
        WindowStats::from_points(self.points.iter())
    }

    /// Statistics of the window as it would be after [`push`](Self::push)ing
    /// `candidate`, without modifying it.
    pub fn prospective_stats(&self, candidate: &Point2D) -> WindowStats {
        let evict = usize::from(self.points.len() >= self.capacity);
        WindowStats::from_points(
            self.points
                .iter()
                .skip(evict)
                .chain(std::iter::once(candidate)),
        )
    }

    /// Appends `p`, returning the evicted oldest entry when over capacity.
    pub fn push(&mut self, p: Point2D) -> Option<Point2D> {
        self.points.push_back(p);
        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }
}

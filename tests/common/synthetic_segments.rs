use vp_listener::LineSegment;

/// Segment through `(x, y)` at `angle_deg`, spanning `half_len` on each side
/// along x.
pub fn segment_through(x: f64, y: f64, angle_deg: f64, half_len: f64) -> LineSegment {
    let m = angle_deg.to_radians().tan();
    LineSegment::from_coords(x - half_len, y - m * half_len, x + half_len, y + m * half_len)
}

/// Two lane-like segments (left rising, right falling) meeting at `(x, y)`.
pub fn lane_pair(x: f64, y: f64) -> Vec<LineSegment> {
    vec![
        segment_through(x, y, 45.0, 20.0),
        segment_through(x, y, -45.0, 20.0),
    ]
}

/// Deterministic pseudo-random jitter in `[-amplitude, amplitude]`.
pub fn jitter(i: usize, amplitude: f64) -> f64 {
    let h = (i as u64)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let unit = (h >> 11) as f64 / (1u64 << 53) as f64;
    (unit * 2.0 - 1.0) * amplitude
}

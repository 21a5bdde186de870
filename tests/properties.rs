use vp_listener::stability::HistoryWindow;
use vp_listener::{
    IntersectionEngine, LineSegment, Point2D, SpatialRegion, StabilityFilter, StabilityParams,
};

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment::from_coords(x1, y1, x2, y2)
}

#[test]
fn vertical_or_parallel_pairs_emit_nothing() {
    let engine = IntersectionEngine::default();
    let cases = [
        (seg(0.0, 0.0, 10.0, 10.0), seg(5.0, -3.0, 15.0, 7.0)),
        (seg(0.0, 0.0, 10.0, -20.0), seg(1.0, 1.0, 2.0, -1.0)),
        (seg(4.0, 0.0, 4.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)),
        (seg(0.0, 10.0, 10.0, 0.0), seg(4.0, 0.0, 4.0, 10.0)),
        (seg(4.0, 0.0, 4.0, 10.0), seg(7.0, 0.0, 7.0, 10.0)),
    ];
    for (a, b) in cases {
        assert!(
            engine.compute_candidates(&[a, b]).is_empty(),
            "pair {a:?} / {b:?} should be skipped"
        );
    }
}

#[test]
fn angle_band_gate_per_pair() {
    let engine = IntersectionEngine::default();
    let through_origin = |deg: f64| {
        let m = deg.to_radians().tan();
        seg(-10.0, -10.0 * m, 10.0, 10.0 * m)
    };
    let inside = [11.0, 30.0, 45.0, 60.0, 79.0];
    let outside = [0.0, 5.0, 9.9, 80.5, 85.0, 89.0];
    for &a in &inside {
        for &b in &inside {
            if a == b {
                continue;
            }
            assert_eq!(
                engine
                    .compute_candidates(&[through_origin(a), through_origin(-b)])
                    .len(),
                1,
                "{a} / -{b}"
            );
        }
        for &b in &outside {
            assert!(engine
                .compute_candidates(&[through_origin(a), through_origin(b)])
                .is_empty());
            assert!(engine
                .compute_candidates(&[through_origin(-b), through_origin(-a)])
                .is_empty());
        }
    }
}

#[test]
fn intersection_is_deterministic() {
    let engine = IntersectionEngine::default();
    let segs = [seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)];
    for _ in 0..10 {
        assert_eq!(engine.compute_candidates(&segs), vec![Point2D::new(5.0, 5.0)]);
    }
}

#[test]
fn point_beyond_x_max_is_never_stored() {
    let mut filter = StabilityFilter::default();
    let region = SpatialRegion::default();
    assert!(!filter.accept(Point2D::new(region.x_max + 1.0, 500.0)));
    assert!(filter.window().is_empty());
    assert!(filter.accept(Point2D::new(600.0, 500.0)));
    assert!(!filter.accept(Point2D::new(region.x_max + 1.0, 500.0)));
    assert_eq!(filter.window().len(), 1);
}

#[test]
fn first_point_accepted_regardless_of_threshold() {
    for desired_std_dev in [0.0, 1e-9, 1.0, 1000.0] {
        let mut filter = StabilityFilter::new(StabilityParams {
            desired_std_dev,
            ..Default::default()
        });
        assert!(filter.accept(Point2D::new(540.0, 600.0)));
    }
}

#[test]
fn window_keeps_most_recent_capacity_points() {
    let mut filter = StabilityFilter::default();
    let n = filter.params().capacity;
    let points: Vec<Point2D> = (0..n + 5)
        .map(|i| Point2D::new(600.0 + (i % 10) as f64 * 0.1, 500.0))
        .collect();
    for p in &points {
        assert!(filter.accept(*p));
    }
    let kept: Vec<Point2D> = filter.window().iter().copied().collect();
    assert_eq!(kept, points[5..].to_vec());
}

#[test]
fn spread_rejection_rolls_back_completely() {
    let mut filter = StabilityFilter::new(StabilityParams {
        region: SpatialRegion {
            x_min: 0.0,
            x_max: 20000.0,
            y_min: 0.0,
            y_max: 20000.0,
        },
        ..Default::default()
    });
    for i in 0..30 {
        let d = (i % 5) as f64 - 2.0;
        assert!(filter.accept(Point2D::new(600.0 + d, 500.0 - d)));
    }
    let before: Vec<Point2D> = filter.window().iter().copied().collect();
    let stats_before = filter.stats();
    let latest_before = filter.latest_x();

    assert!(!filter.accept(Point2D::new(600.0 + 10000.0, 500.0)));

    let after: Vec<Point2D> = filter.window().iter().copied().collect();
    assert_eq!(before, after);
    assert_eq!(stats_before, filter.stats());
    assert_eq!(latest_before, filter.latest_x());
}

#[test]
fn window_statistics_match_direct_computation() {
    let mut window = HistoryWindow::new(4);
    for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
        window.push(Point2D::new(x, 2.0 * x));
    }
    let s = window.stats();
    assert_eq!(s.count, 4);
    assert!((s.mean.x - 3.5).abs() < 1e-12);
    assert!((s.std_dev.x - 1.25f64.sqrt()).abs() < 1e-12);
    assert!((s.std_dev.y - 5.0f64.sqrt()).abs() < 1e-12);
}

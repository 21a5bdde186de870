use vp_listener::output::OutputLoop;
use vp_listener::{LineListener, LineSegment, ListenerParams};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Demo stub: two lane-like segments crossing inside the default region
    let params = ListenerParams::default();
    let mut listener = LineListener::new(params);
    let mut output = OutputLoop::new(
        listener.latest(),
        |x: f64| println!("x_point_data: {x:.3}"),
        &params.output,
    );

    output.tick();
    let frame = [
        LineSegment::from_coords(600.0, 450.0, 620.0, 470.0),
        LineSegment::from_coords(600.0, 550.0, 650.0, 500.0),
    ];
    let report = listener.on_frame(&frame);
    println!(
        "segments={} candidates={} accepted={} elapsed_ms={:.3}",
        report.segments, report.intersection.candidates, report.filter.accepted, report.elapsed_ms
    );
    output.tick();
}

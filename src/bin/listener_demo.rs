use vp_listener::config::listener_demo::{self as cfg, ListenerDemoConfig};
use vp_listener::io::{load_frames, write_json_file};
use vp_listener::output::Rate;
use vp_listener::{run_threaded, LineListener, LineSegment, RunReport};
use std::env;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cfg::load_config(Path::new(&config_path))?;
    let params = config.params.resolve()?;

    let frames = load_frames(&config.frames)?;
    log::info!(
        "Replaying {} frames from {}",
        frames.len(),
        config.frames.display()
    );

    let (tx, rx) = mpsc::channel();
    let producer = spawn_replay(frames, &config, tx);

    let mut published = Vec::new();
    let result = run_threaded(LineListener::new(params), rx, |x: f64| {
        log::info!("x_point_data: {x:.3}");
        published.push(x);
    });
    producer
        .join()
        .map_err(|_| "replay thread panicked".to_string())?;
    let run = result?;
    drop(run.publisher);

    let report = RunReport::new(params, run.frames, published);
    report.print_text_summary();

    let result_path = config.output.result_path();
    write_json_file(&result_path, &report)?;
    println!("Wrote run report JSON to {}", result_path.display());
    Ok(())
}

/// Feeds frames into the channel, paced at `replayHz` when configured.
fn spawn_replay(
    frames: Vec<Vec<LineSegment>>,
    config: &ListenerDemoConfig,
    tx: mpsc::Sender<Vec<LineSegment>>,
) -> thread::JoinHandle<()> {
    let mut rate = config.replay_hz.map(Rate::new);
    thread::spawn(move || {
        for frame in frames {
            if tx.send(frame).is_err() {
                break;
            }
            if let Some(rate) = rate.as_mut() {
                rate.sleep();
            }
        }
    })
}

fn usage() -> String {
    "Usage: listener_demo <config.json>".to_string()
}

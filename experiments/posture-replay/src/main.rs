mod replay;

use log::{debug, info, warn};
use posture::classifier::left_segments;
use posture::{PostureConfig, PostureMonitor, PostureSession, Viewport};
use replay::ReplaySource;
use std::env;
use std::path::PathBuf;

const SOURCE_WIDTH: u32 = 480;
const SOURCE_HEIGHT: u32 = 640;
const VIEW_WIDTH: f64 = 1080.0;
const VIEW_HEIGHT: f64 = 1440.0;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recording: PathBuf = env::var("POSTURE_REPLAY_PATH")
        .unwrap_or_else(|_| "recordings/session.jsonl".to_string())
        .into();

    match env::var("POSTURE_LOG_DIR") {
        Ok(dir) => posture_base::init_file_logger(dir)?,
        Err(_) => posture_base::init_stdout_logger(),
    }

    let config = match env::var("POSTURE_CONFIG") {
        Ok(path) => match PostureConfig::load(&path) {
            Ok(config) => config,
            Err(e) => posture_base::log_fatal!("cannot use config {}: {}", path, e),
        },
        Err(_) => PostureConfig::default(),
    };

    println!("Posture Replay");
    println!("Recording: {}", recording.display());
    println!("Debounce: {}ms", config.min_interval_ms());
    println!();

    let text = std::fs::read_to_string(&recording)?;
    let mut source = ReplaySource::parse(&text)?;
    let last_frame = source.last().cloned();
    if source.is_empty() {
        warn!("{} holds no frames", recording.display());
    }
    info!("loaded {} frames", source.len());

    let mut session = PostureSession::new(&config);
    session.set_viewport(Viewport::new(SOURCE_WIDTH, SOURCE_HEIGHT, VIEW_WIDTH, VIEW_HEIGHT));

    let mut monitor = PostureMonitor::new(session);
    let stats = monitor
        .run(&mut source, |outcome| {
            let (points, edges) = outcome
                .overlay
                .as_ref()
                .map(|o| (o.points.len(), o.edges.len()))
                .unwrap_or((0, 0));
            debug!("frame: {} ({} points, {} edges)", outcome.label, points, edges);
            if let Some(label) = outcome.emitted {
                println!("{} ({} points, {} edges)", label, points, edges);
            }
        })
        .await;

    if let Some(last) = monitor.session().current() {
        println!();
        println!("Final posture: {}", last);
    }
    println!("{} frames, {} announcements", stats.frames, stats.emitted);

    // left-side segment lengths of the last frame help when tuning thresholds
    if let Some([torso, thigh, shin]) = last_frame.and_then(|f| left_segments(&f.snapshot)) {
        debug!("last frame segments: torso {:.3}, thigh {:.3}, shin {:.3}", torso, thigh, shin);
    }

    Ok(())
}

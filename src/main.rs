use std::path::PathBuf;

use anyhow::{Context, Result};
use body_face_tracker::{
    config::{Config, EXAMPLE_CONFIG},
    pipeline::{FaceTracker, LoggingSink, simulated, start_simulated_sensor, start_tracker},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Stop after this many simulated frames
    #[arg(short, long)]
    frames: Option<u64>,

    /// Angle increment in degrees for reported orientation
    #[arg(short, long)]
    step: Option<f64>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    example_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.example_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(frames) = args.frames {
        config.simulation.frames = Some(frames);
    }
    if let Some(step) = args.step {
        config.orientation.quantization_step = step;
    }
    config.validate()?;

    let frame = config.frame.resolve(simulated::reference_frame());
    log::info!("reference frame {}x{}", frame.width, frame.height);

    let tracker = FaceTracker::new(&config, frame);
    let (inputs, tracker_handle) = start_tracker(tracker, LoggingSink)?;
    let sensor = start_simulated_sensor(&config.simulation, frame, inputs)?;

    sensor.wait();
    tracker_handle.join()?;

    Ok(())
}

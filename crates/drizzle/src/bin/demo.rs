//! # DRIZZLE Demo
//!
//! Runs the smoke + rain scene headless for a fixed time, with a camera
//! orbiting the scene and a consumer thread standing in for buffer upload.
//!
//! ```bash
//! # Default scene, five seconds at 60 FPS
//! RUST_LOG=info drizzle-demo
//!
//! # Custom scene file, fixed seed, faster orbit
//! RUST_LOG=debug drizzle-demo --config data/scene.toml --seed 7 --orbit 1.0
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use drizzle::{FrameClock, OrbitCamera, Scene, SceneConfig, UploadQueue};
use tracing_subscriber::EnvFilter;

/// Frames the upload consumer may lag behind.
const UPLOAD_DEPTH: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "drizzle-demo")]
#[command(about = "Headless smoke and rain particle run", long_about = None)]
#[command(version)]
struct Args {
    /// Seconds to run
    #[arg(long, default_value_t = 5.0)]
    seconds: f32,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Scene file (TOML); the built-in smoke + rain scene if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base RNG seed for the emitters
    #[arg(long)]
    seed: Option<u64>,

    /// Camera orbit speed in radians per second
    #[arg(long, default_value_t = 0.25)]
    orbit: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0, "--fps must be positive");
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "--seconds must be a non-negative number"
    );

    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut scene = Scene::new(&config).context("building scene")?;
    let camera = OrbitCamera {
        angular_speed: args.orbit,
        ..OrbitCamera::default()
    };
    let mut upload = UploadQueue::spawn(UPLOAD_DEPTH).context("starting upload thread")?;

    let frame_budget = Duration::from_secs(1) / args.fps;
    let run_for = Duration::from_secs_f32(args.seconds);
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);

    tracing::info!(
        "Running {} emitters for {:.1}s at {} FPS",
        scene.emitters().len(),
        args.seconds,
        args.fps
    );

    while start.elapsed() < run_for {
        let frame_start = Instant::now();
        let tick = clock.tick_at(frame_start);
        let elapsed = frame_start.duration_since(start).as_secs_f32();

        scene.update_with_view(tick.dt, &camera.view(elapsed));
        upload.submit(&scene);

        if tick.fps.is_some() {
            for (name, stats) in scene.stats() {
                tracing::info!("  {name}: {stats}");
            }
        }

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    let dropped = upload.dropped();
    let totals = upload.finish().context("upload thread panicked")?;

    tracing::info!(
        "Done: {} frames, {} uploaded ({} dropped), {} instances, {:.1} MiB",
        clock.frame(),
        totals.frames,
        dropped,
        totals.instances,
        totals.bytes as f64 / (1024.0 * 1024.0)
    );

    Ok(())
}

//! Elastic CLI: headless access to the slider model.
//!
//! Commands:
//! - `decay`: bounded displacement for a raw overflow distance
//! - `classify`: region and raw overflow of a pointer position
//! - `simulate`: scripted press / drag / release, traced frame by frame
//! - `config`: print or write the default slider configuration

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use elastic_core::{
    classify, decay, ElasticSlider, Region, SliderConfig, SliderVisuals, TrackBounds, MAX_OVERFLOW,
};

/// Frames after release before a simulation is declared unsettled.
const SETTLE_LIMIT: usize = 10_000;

#[derive(Parser)]
#[command(
    name = "elastic",
    about = "Elastic CLI: overflow decay and slider simulation"
)]
struct Cli {
    /// Log filter written to stderr (e.g. `debug`, `elastic_core=trace`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bounded displacement for a raw overflow distance.
    Decay {
        /// Raw distance past the track edge.
        value: f64,

        /// Displacement cap.
        #[arg(long, default_value_t = MAX_OVERFLOW)]
        max: f64,
    },
    /// Classify a pointer position against track bounds.
    Classify {
        /// Pointer x.
        #[arg(allow_hyphen_values = true)]
        x: f64,

        #[arg(long, allow_hyphen_values = true)]
        left: f64,

        #[arg(long, allow_hyphen_values = true)]
        right: f64,
    },
    /// Press at the track centre, drag to `--to`, release, and tick until settled.
    Simulate {
        /// Pointer x at the end of the drag.
        #[arg(long, allow_hyphen_values = true)]
        to: f64,

        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        left: f64,

        #[arg(long, default_value_t = 200.0, allow_hyphen_values = true)]
        right: f64,

        /// Frames per second of the simulated clock.
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Number of pointer samples between press and release.
        #[arg(long, default_value_t = 12)]
        drag_frames: usize,

        /// Slider configuration (TOML). Defaults are used when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON lines instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the default configuration as TOML, or write it to a file.
    Config {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Decay { value, max } => {
            println!("{}", decay(value, max));
            Ok(())
        }
        Commands::Classify { x, left, right } => run_classify(x, left, right),
        Commands::Simulate {
            to,
            left,
            right,
            fps,
            drag_frames,
            config,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let params = SimulationParams {
                to,
                bounds: checked_bounds(left, right)?,
                fps,
                drag_frames,
            };
            let simulation = simulate(config, &params)?;
            if json {
                print_json(&simulation)
            } else {
                print_table(&simulation);
                Ok(())
            }
        }
        Commands::Config { output } => run_config(output.as_deref()),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SliderConfig> {
    match path {
        Some(path) => SliderConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(SliderConfig::default()),
    }
}

fn checked_bounds(left: f64, right: f64) -> Result<TrackBounds> {
    ensure!(
        left.is_finite() && right.is_finite(),
        "track bounds must be finite"
    );
    if right < left {
        bail!("--right ({right}) must not be less than --left ({left})");
    }
    Ok(TrackBounds::new(left, right))
}

fn run_classify(x: f64, left: f64, right: f64) -> Result<()> {
    let bounds = checked_bounds(left, right)?;
    let c = classify(x, bounds);
    println!("region:   {}", c.region);
    println!("overflow: {}", c.raw_overflow);
    Ok(())
}

fn run_config(output: Option<&Path>) -> Result<()> {
    let toml = SliderConfig::default().to_toml_string()?;
    match output {
        Some(path) => {
            std::fs::write(path, &toml).with_context(|| format!("write {}", path.display()))?;
            println!("Config written to: {}", path.display());
        }
        None => print!("{toml}"),
    }
    Ok(())
}

// ── Simulation ───────────────────────────────────────────────────────

struct SimulationParams {
    to: f64,
    bounds: TrackBounds,
    fps: u32,
    drag_frames: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Phase {
    Drag,
    Release,
}

#[derive(Debug, Serialize)]
struct FrameSample {
    frame: usize,
    time: f64,
    phase: Phase,
    pointer_x: f64,
    overflow: f64,
    region: Region,
    track_scale_x: f64,
    left_icon_x: f64,
    right_icon_x: f64,
}

#[derive(Debug, Serialize)]
struct Summary {
    frames: usize,
    settle_frames: usize,
    peak_overflow: f64,
    /// Lowest overflow seen after release; negative when the spring overshoots.
    min_overflow: f64,
    final_overflow: f64,
    final_region: Region,
    volume: u8,
    overflow_notifications: usize,
}

#[derive(Debug)]
struct Simulation {
    frames: Vec<FrameSample>,
    summary: Summary,
}

fn simulate(config: SliderConfig, params: &SimulationParams) -> Result<Simulation> {
    ensure!(params.fps > 0, "--fps must be positive");
    let dt = 1.0 / f64::from(params.fps);

    let mut slider = ElasticSlider::new(config);
    slider.mount(params.bounds);

    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    let subscription = slider.on_overflow_change(move |_| counter.set(counter.get() + 1));

    let start = params.bounds.center();
    if !slider.pointer_down(start) {
        bail!("track is not mounted");
    }
    info!(start, to = params.to, "simulating drag");

    let mut frames = Vec::new();
    let steps = params.drag_frames.max(1);
    for i in 1..=steps {
        let x = start + (params.to - start) * (i as f64 / steps as f64);
        slider.pointer_move(x, true);
        slider.tick(dt);
        frames.push(sample(&slider, frames.len(), dt, Phase::Drag));
    }
    let peak_overflow = frames.iter().map(|f| f.overflow).fold(0.0, f64::max);

    slider.lost_pointer_capture();
    let mut settle_frames = 0;
    let mut min_overflow = slider.overflow();
    while slider.is_animating() {
        if settle_frames >= SETTLE_LIMIT {
            bail!("slider did not settle within {SETTLE_LIMIT} frames");
        }
        slider.tick(dt);
        settle_frames += 1;
        min_overflow = min_overflow.min(slider.overflow());
        frames.push(sample(&slider, frames.len(), dt, Phase::Release));
    }
    debug!(settle_frames, "settled");

    slider.unsubscribe_overflow(subscription);

    let summary = Summary {
        frames: frames.len(),
        settle_frames,
        peak_overflow,
        min_overflow,
        final_overflow: slider.overflow(),
        final_region: slider.region(),
        volume: slider.volume().get(),
        overflow_notifications: notifications.get(),
    };
    Ok(Simulation { frames, summary })
}

fn sample(slider: &ElasticSlider, frame: usize, dt: f64, phase: Phase) -> FrameSample {
    let visuals = SliderVisuals::from_slider(slider);
    FrameSample {
        frame,
        time: (frame + 1) as f64 * dt,
        phase,
        pointer_x: slider.pointer_x(),
        overflow: slider.overflow(),
        region: slider.region(),
        track_scale_x: visuals.track_scale_x,
        left_icon_x: visuals.left_icon_x,
        right_icon_x: visuals.right_icon_x,
    }
}

fn print_table(sim: &Simulation) {
    println!(
        "{:>5} {:>7} {:<8} {:>9} {:>9} {:<7} {:>8}",
        "Frame", "Time", "Phase", "Pointer", "Overflow", "Region", "ScaleX"
    );
    println!("{}", "-".repeat(60));
    for f in &sim.frames {
        let phase = match f.phase {
            Phase::Drag => "drag",
            Phase::Release => "release",
        };
        println!(
            "{:>5} {:>7.3} {:<8} {:>9.2} {:>9.3} {:<7} {:>8.4}",
            f.frame, f.time, phase, f.pointer_x, f.overflow, f.region, f.track_scale_x
        );
    }

    let s = &sim.summary;
    println!();
    println!("Peak overflow:  {:.3}", s.peak_overflow);
    println!("Min overflow:   {:.3}", s.min_overflow);
    println!("Settled after:  {} frames", s.settle_frames);
    println!("Final overflow: {}", s.final_overflow);
    println!("Final region:   {}", s.final_region);
    println!("Volume:         {}", s.volume);
    println!("Notifications:  {}", s.overflow_notifications);
}

fn print_json(sim: &Simulation) -> Result<()> {
    for f in &sim.frames {
        println!("{}", serde_json::to_string(f)?);
    }
    println!("{}", serde_json::to_string(&sim.summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(to: f64) -> SimulationParams {
        SimulationParams {
            to,
            bounds: TrackBounds::new(0.0, 200.0),
            fps: 60,
            drag_frames: 12,
        }
    }

    #[test]
    fn cli_parses_negative_positions() {
        let cli = Cli::try_parse_from(["elastic", "simulate", "--to", "-50"]).unwrap();
        match cli.command {
            Commands::Simulate { to, left, right, .. } => {
                assert_eq!(to, -50.0);
                assert_eq!(left, 0.0);
                assert_eq!(right, 200.0);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn left_drag_peaks_below_cap_and_settles() {
        let sim = simulate(SliderConfig::default(), &params(-50.0)).unwrap();
        let s = &sim.summary;

        assert!((s.peak_overflow - decay(50.0, 50.0)).abs() < 1e-9);
        assert!(s.settle_frames > 0);
        assert_eq!(s.final_overflow, 0.0);
        assert_eq!(s.final_region, Region::Middle);
        assert_eq!(s.volume, 0);
        assert!(s.overflow_notifications > s.settle_frames / 2);
        assert_eq!(sim.frames.len(), 12 + s.settle_frames);
    }

    #[test]
    fn bouncy_release_overshoots() {
        let sim = simulate(SliderConfig::default(), &params(400.0)).unwrap();
        assert!(sim.summary.min_overflow < 0.0);
        let last_drag = sim
            .frames
            .iter()
            .filter(|f| f.phase == Phase::Drag)
            .last()
            .unwrap();
        assert_eq!(last_drag.region, Region::Right);
        assert!(last_drag.right_icon_x > 0.0);
    }

    #[test]
    fn drag_inside_track_never_overflows() {
        let sim = simulate(SliderConfig::default(), &params(150.0)).unwrap();
        assert_eq!(sim.summary.peak_overflow, 0.0);
        assert!(sim.frames.iter().all(|f| f.region == Region::Middle));
        assert_eq!(sim.summary.volume, 75);
    }

    #[test]
    fn zero_fps_is_rejected() {
        let mut p = params(10.0);
        p.fps = 0;
        assert!(simulate(SliderConfig::default(), &p).is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(checked_bounds(10.0, 0.0).is_err());
        assert!(checked_bounds(f64::NAN, 0.0).is_err());
        assert!(checked_bounds(0.0, 0.0).is_ok());
    }

    #[test]
    fn config_command_writes_parseable_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slider.toml");
        run_config(Some(&path)).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.max_overflow, SliderConfig::default().max_overflow);
    }

    #[test]
    fn frames_serialize_as_json_lines() {
        let sim = simulate(SliderConfig::default(), &params(-20.0)).unwrap();
        let line = serde_json::to_string(&sim.frames[11]).unwrap();
        assert!(line.contains(r#""phase":"drag""#));
        assert!(line.contains(r#""region":"left""#));
    }
}

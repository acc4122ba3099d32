//! # Trail Replay
//!
//! Runs a cursor trail on a headless host, moving the pointer around a
//! circle once per frame, and prints what the trail did.
//!
//! ```text
//! RUST_LOG=glimmer=debug trail_replay --frames 600 --seed 7
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glimmer::{CursorTrail, HeadlessHost, HostEvent, TrailConfig, TrailState, Viewport};

#[derive(Parser, Debug)]
#[command(name = "trail_replay")]
#[command(about = "Replay a synthetic pointer path through the cursor trail", long_about = None)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// RNG seed, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Viewport width (px)
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height (px)
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Radius of the pointer's circular path (px)
    #[arg(long, default_value_t = 120.0)]
    radius: f32,

    /// Angle the pointer advances per frame (radians)
    #[arg(long, default_value_t = 0.08)]
    step: f32,

    /// Print the effective config and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(cli: &Cli) -> glimmer::ConfigResult<TrailConfig> {
    let mut config = match &cli.config {
        Some(path) => TrailConfig::from_file(path)?,
        None => TrailConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

#[allow(clippy::cast_precision_loss)]
fn pointer_at(cli: &Cli, frame: u64) -> HostEvent {
    let angle = frame as f32 * cli.step;
    let cx = cli.width as f32 / 2.0;
    let cy = cli.height as f32 / 2.0;
    HostEvent::PointerMove {
        x: cx + angle.cos() * cli.radius,
        y: cy + angle.sin() * cli.radius,
    }
}

fn main() -> ExitCode {
    // Diagnostics on stderr, results on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid trail config");
            return ExitCode::FAILURE;
        }
    };

    if cli.dump_config {
        return match config.to_toml_string() {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                tracing::error!(%error, "failed to serialize config");
                ExitCode::FAILURE
            }
        };
    }

    let mut host = HeadlessHost::new(Viewport::new(cli.width, cli.height));
    let mut trail = CursorTrail::new(&mut host, config);

    if trail.activate() != TrailState::Running {
        tracing::error!("trail did not start");
        return ExitCode::FAILURE;
    }

    for frame in 0..cli.frames {
        trail.dispatch(pointer_at(&cli, frame));
        if let Some(report) = trail.fire_pending_frame() {
            tracing::debug!(
                frame = report.frame,
                alive = report.tick.alive,
                links = report.tick.links,
                commands = report.commands,
                "frame"
            );
        }
    }

    let stats = *trail.stats();
    trail.deactivate();
    drop(trail);

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                     CURSOR TRAIL REPLAY                          ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    println!("  frames:       {}", stats.frames);
    println!("  spawned:      {}", stats.spawned);
    println!("  expired:      {}", stats.expired);
    println!("  peak alive:   {}", stats.peak_alive);
    println!("  peak links:   {}", stats.peak_links);
    println!("  avg frame:    {:.1} us", stats.avg_frame_us());
    println!("  max frame:    {} us", stats.max_frame_us);
    println!();
    println!(
        "  teardown:     {} listeners, pending frame {:?}",
        host.listener_count(),
        host.pending_frame()
    );

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_flag_overrides_config() {
        let cli = Cli::try_parse_from(["trail_replay", "--seed", "7", "--frames", "10"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(cli.frames, 10);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from(["trail_replay", "--config", "/definitely/not/here/trail.toml"]).unwrap();
        assert!(matches!(load_config(&cli), Err(glimmer::ConfigError::Io { .. })));
    }

    #[test]
    fn test_pointer_path_circles_the_centre() {
        let cli = Cli::try_parse_from(["trail_replay", "--width", "200", "--height", "100", "--radius", "10"]).unwrap();
        let HostEvent::PointerMove { x, y } = pointer_at(&cli, 0) else {
            panic!("pointer event expected");
        };
        assert!((x - 110.0).abs() < 1e-4);
        assert!((y - 50.0).abs() < 1e-4);
    }
}

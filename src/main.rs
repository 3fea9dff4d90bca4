//! Candle Runner headless entry point
//!
//! Drives the simulation at a fixed host frame rate with a simple autopilot
//! on the jump key. Useful for smoke testing balance changes and for
//! producing JSON-lines frame traces.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use candle_runner::render::{FrameView, Hud, RenderSink};
use candle_runner::sim::GameState;
use candle_runner::{Config, FrameControl, LifecycleSink, Runner};

#[derive(Parser, Debug)]
#[command(name = "candle-runner", about = "Headless Candle Runner autopilot")]
struct Args {
    /// RNG seed for the first run
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Host frame rate to simulate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Maximum simulated seconds per run
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,

    /// Number of runs (restarts after each game over)
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// JSON file overriding config fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every frame as a JSON line to stdout
    #[arg(long)]
    trace: bool,
}

/// Writes each frame as one JSON line
struct TraceSink<W: Write> {
    out: W,
}

impl<W: Write> RenderSink for TraceSink<W> {
    fn render(&mut self, view: &FrameView<'_>) {
        let written = serde_json::to_string(view)
            .map_err(io::Error::from)
            .and_then(|line| writeln!(self.out, "{line}"));
        if let Err(e) = written {
            log::warn!("Trace write failed: {}", e);
        }
    }
}

/// Logs HUD changes instead of drawing
#[derive(Default)]
struct LogSink {
    last_banner: Option<String>,
}

impl RenderSink for LogSink {
    fn render(&mut self, view: &FrameView<'_>) {
        let hud = Hud::from_view(view);
        if hud.banner != self.last_banner {
            match &hud.banner {
                Some(banner) => log::info!("{} ({})", banner, hud.rate),
                None => log::info!("Multiplier over ({})", hud.rate),
            }
            self.last_banner = hud.banner;
        }
    }
}

#[derive(Default)]
struct Scoreboard {
    scores: Vec<u64>,
}

impl LifecycleSink for Scoreboard {
    fn game_over(&mut self, final_score: u64) {
        log::info!("Your Score: {}", final_score);
        self.scores.push(final_score);
    }

    fn restarted(&mut self) {
        log::debug!("Overlay hidden");
    }
}

/// Presses jump when a candle gets close, releases after a fixed hold
struct Autopilot {
    lookahead: f32,
    hold: f64,
    pressed_at: Option<f64>,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            lookahead: 40.0,
            hold: 0.25,
            pressed_at: None,
        }
    }

    fn drive(&mut self, runner: &mut Runner, now: f64) {
        if let Some(at) = self.pressed_at {
            if now - at >= self.hold {
                runner.on_release(now);
                self.pressed_at = None;
            }
            return;
        }
        if Self::candle_ahead(runner.state(), self.lookahead) {
            runner.on_press(now);
            self.pressed_at = Some(now);
        }
    }

    fn candle_ahead(state: &GameState, lookahead: f32) -> bool {
        if state.actor.airborne {
            return false;
        }
        let front = state.actor.bounds().right();
        state
            .candles
            .iter()
            .any(|c| c.pos.x >= front && c.pos.x - front < lookahead)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Config::from_json(&json)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be positive, got {}", args.fps);
    }

    let config = load_config(args.config.as_deref())?;
    let mut runner = Runner::new(config, args.seed, 0.0).context("Invalid config")?;

    let frame_time = 1.0 / args.fps;
    let frames_per_run = (args.seconds * args.fps).ceil() as u64;
    let mut scoreboard = Scoreboard::default();
    let mut trace = TraceSink {
        out: io::stdout().lock(),
    };
    let mut log_sink = LogSink::default();
    let mut now = 0.0;

    for run in 0..args.runs {
        if run > 0 {
            runner.restart(now, &mut scoreboard);
        }
        let mut autopilot = Autopilot::new();

        for _ in 0..frames_per_run {
            now += frame_time;
            autopilot.drive(&mut runner, now);
            let control = if args.trace {
                runner.frame(now, &mut trace, &mut scoreboard)
            } else {
                runner.frame(now, &mut log_sink, &mut scoreboard)
            };
            if control == FrameControl::Stop {
                break;
            }
        }

        if !runner.state().is_over() {
            log::info!(
                "Run {} survived {:.0}s with score {}",
                runner.runs(),
                args.seconds,
                runner.state().score.truncated()
            );
        }
    }

    if let Some(best) = scoreboard.scores.iter().max() {
        log::info!("Best score over {} runs: {}", scoreboard.scores.len(), best);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.scroll_speed, Config::default().scroll_speed);
    }

    #[test]
    fn test_load_config_missing_file_names_path() {
        let path = Path::new("no/such/dir/candle-runner.json");
        let err = load_config(Some(path)).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to read config file"));
        assert!(message.contains("candle-runner.json"));
    }
}

//! Candle Runner - an endless runner over a scrolling candle chart
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `clock`: Wall-clock to bounded frame delta conversion
//! - `config`: Data-driven game balance with validation
//! - `render`: Render sink boundary and HUD text
//! - `runner`: Frame driver tying input, simulation and sinks together

pub mod clock;
pub mod config;
pub mod render;
pub mod runner;
pub mod sim;

pub use clock::FrameClock;
pub use config::{Config, ConfigError, MultiplierPolicy};
pub use render::{FrameView, Hud, RenderSink};
pub use runner::{FrameControl, LifecycleSink, Runner};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// World scroll speed (pixels/s)
    pub const SCROLL_SPEED: f32 = 300.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1200.0;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_FORCE: f32 = -800.0;
    pub const MAX_FALL_SPEED: f32 = 1000.0;

    /// Actor defaults - fixed horizontally, the world moves instead
    pub const ACTOR_WIDTH: f32 = 64.0;
    pub const ACTOR_HEIGHT: f32 = 64.0;
    pub const ACTOR_START_X: f32 = 100.0;
    pub const ACTOR_START_Y: f32 = 300.0;

    /// Jump input timing (seconds)
    pub const JUMP_BUFFER: f64 = 0.15;
    pub const MAX_JUMP_HOLD: f32 = 0.2;

    /// Candle (obstacle) defaults
    pub const CANDLE_WIDTH: f32 = 20.0;
    pub const CANDLE_MIN_HEIGHT: f32 = 40.0;
    pub const CANDLE_MAX_HEIGHT: f32 = 80.0;
    pub const CANDLE_MIN_GAP: f32 = 300.0;
    pub const CANDLE_GAP_JITTER: f32 = 100.0;
    pub const CANDLE_MIN_INTERVAL: f32 = 1.0;
    /// Probability a candle is green
    pub const CANDLE_GREEN_CHANCE: f32 = 0.7;

    /// Pump (pickup) defaults
    pub const PUMP_SIZE: f32 = 20.0;
    pub const PUMP_INTERVAL: f32 = 6.0;
    /// Pumps appear with their top edge in [PUMP_MIN_Y, PUMP_MIN_Y + PUMP_BAND)
    pub const PUMP_MIN_Y: f32 = 100.0;
    pub const PUMP_BAND: f32 = 150.0;
    /// Seconds a multiplier lasts after the most recent pump
    pub const MULTIPLIER_DURATION: f32 = 10.0;

    /// Score per second at multiplier 1
    pub const BASE_SCORE_RATE: f64 = 60.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f64 = 0.05;

    /// Sprite sheet animation
    pub const SPRITE_FRAMES: u8 = 4;
    pub const SPRITE_FRAME_TIME: f32 = 0.1;
}

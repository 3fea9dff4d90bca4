//! Game balance configuration
//!
//! Defaults come from [`crate::consts`]. A JSON document may override any
//! subset of fields. Every config is validated once, before a run starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// What collecting a pump does to the score multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierPolicy {
    /// Each pump adds one to the multiplier
    #[default]
    Stack,
    /// Each pump sets the multiplier to a fixed value
    Fixed(u32),
}

impl MultiplierPolicy {
    /// Multiplier after collecting one pump at `current`
    pub fn apply(self, current: u32) -> u32 {
        match self {
            MultiplierPolicy::Stack => current.saturating_add(1),
            MultiplierPolicy::Fixed(value) => value,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("`{field}` must be a probability in [0, 1], got {value}")]
    NotProbability { field: &'static str, value: f64 },
    #[error("candle height range is inverted: min {min} > max {max}")]
    InvertedCandleRange { min: f32, max: f32 },
    #[error("actor ({actor}px) does not fit in the playfield ({playfield}px)")]
    ActorTooTall { actor: f32, playfield: f32 },
    #[error("fixed multiplier must be at least 1")]
    ZeroMultiplier,
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub scroll_speed: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub max_fall_speed: f32,

    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_start_x: f32,
    pub actor_start_y: f32,

    /// Seconds a press stays eligible to trigger a jump
    pub jump_buffer: f64,
    /// Seconds of hold after which the key counts as released
    pub max_jump_hold: f32,

    pub candle_width: f32,
    pub candle_min_height: f32,
    pub candle_max_height: f32,
    pub candle_min_gap: f32,
    pub candle_gap_jitter: f32,
    pub candle_min_interval: f32,
    pub candle_green_chance: f32,

    pub pump_size: f32,
    pub pump_interval: f32,
    pub pump_min_y: f32,
    pub pump_band: f32,
    pub multiplier_duration: f32,
    pub multiplier_policy: MultiplierPolicy,

    pub base_score_rate: f64,
    pub max_frame_dt: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            scroll_speed: SCROLL_SPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            max_fall_speed: MAX_FALL_SPEED,

            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            actor_start_x: ACTOR_START_X,
            actor_start_y: ACTOR_START_Y,

            jump_buffer: JUMP_BUFFER,
            max_jump_hold: MAX_JUMP_HOLD,

            candle_width: CANDLE_WIDTH,
            candle_min_height: CANDLE_MIN_HEIGHT,
            candle_max_height: CANDLE_MAX_HEIGHT,
            candle_min_gap: CANDLE_MIN_GAP,
            candle_gap_jitter: CANDLE_GAP_JITTER,
            candle_min_interval: CANDLE_MIN_INTERVAL,
            candle_green_chance: CANDLE_GREEN_CHANCE,

            pump_size: PUMP_SIZE,
            pump_interval: PUMP_INTERVAL,
            pump_min_y: PUMP_MIN_Y,
            pump_band: PUMP_BAND,
            multiplier_duration: MULTIPLIER_DURATION,
            multiplier_policy: MultiplierPolicy::Stack,

            base_score_rate: BASE_SCORE_RATE,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Y coordinate of the floor (bottom edge of the playfield)
    pub fn floor_y(&self) -> f32 {
        self.playfield_height
    }

    /// Check every field for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("playfield_width", self.playfield_width as f64),
            ("playfield_height", self.playfield_height as f64),
            ("scroll_speed", self.scroll_speed as f64),
            ("gravity", self.gravity as f64),
            ("max_fall_speed", self.max_fall_speed as f64),
            ("actor_width", self.actor_width as f64),
            ("actor_height", self.actor_height as f64),
            ("jump_buffer", self.jump_buffer),
            ("max_jump_hold", self.max_jump_hold as f64),
            ("candle_width", self.candle_width as f64),
            ("candle_min_height", self.candle_min_height as f64),
            ("pump_size", self.pump_size as f64),
            ("pump_interval", self.pump_interval as f64),
            ("multiplier_duration", self.multiplier_duration as f64),
            ("base_score_rate", self.base_score_rate),
            ("max_frame_dt", self.max_frame_dt),
        ];
        let non_negative = [
            ("actor_start_x", self.actor_start_x as f64),
            ("actor_start_y", self.actor_start_y as f64),
            ("candle_min_gap", self.candle_min_gap as f64),
            ("candle_gap_jitter", self.candle_gap_jitter as f64),
            ("candle_min_interval", self.candle_min_interval as f64),
            ("pump_min_y", self.pump_min_y as f64),
            ("pump_band", self.pump_band as f64),
        ];

        for &(field, value) in positive.iter().chain(non_negative.iter()) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if !self.jump_force.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "jump_force",
                value: self.jump_force as f64,
            });
        }
        for &(field, value) in &positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for &(field, value) in &non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let chance = self.candle_green_chance as f64;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::NotProbability {
                field: "candle_green_chance",
                value: chance,
            });
        }
        if self.candle_min_height > self.candle_max_height {
            return Err(ConfigError::InvertedCandleRange {
                min: self.candle_min_height,
                max: self.candle_max_height,
            });
        }
        if self.actor_height >= self.playfield_height {
            return Err(ConfigError::ActorTooTall {
                actor: self.actor_height,
                playfield: self.playfield_height,
            });
        }
        if self.multiplier_policy == MultiplierPolicy::Fixed(0) {
            return Err(ConfigError::ZeroMultiplier);
        }

        Ok(())
    }
}

//! Candle and pump spawning
//!
//! Candles are paced by both time and distance: at least `candle_min_interval`
//! seconds apart and a randomized minimum gap behind the previous candle, so
//! every gap stays jumpable. Pumps are on a plain timer, independent of
//! candle density.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::state::{Candle, CandleTint, Pump};
use crate::config::Config;

/// Seconds since each pool last spawned
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Spawner {
    pub since_candle: f32,
    pub since_pump: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maybe spawn a candle. `last` is the most recently spawned candle still on screen.
    pub fn spawn_candle<R: Rng>(
        &mut self,
        last: Option<&Candle>,
        rng: &mut R,
        dt: f32,
        config: &Config,
    ) -> Option<Candle> {
        self.since_candle += dt;
        if self.since_candle <= config.candle_min_interval {
            return None;
        }

        if let Some(last) = last {
            let gap = config.playfield_width - last.pos.x;
            let required = config.candle_min_gap + rng.random::<f32>() * config.candle_gap_jitter;
            if gap <= required {
                return None;
            }
        }

        self.since_candle = 0.0;
        Some(new_candle(rng, config))
    }

    /// Maybe spawn a pump
    pub fn spawn_pump<R: Rng>(&mut self, rng: &mut R, dt: f32, config: &Config) -> Option<Pump> {
        self.since_pump += dt;
        if self.since_pump <= config.pump_interval {
            return None;
        }

        self.since_pump = 0.0;
        Some(new_pump(rng, config))
    }
}

fn new_candle<R: Rng>(rng: &mut R, config: &Config) -> Candle {
    let span = config.candle_max_height - config.candle_min_height;
    let height = config.candle_min_height + rng.random::<f32>() * span;
    let tint = if rng.random::<f32>() < config.candle_green_chance {
        CandleTint::Green
    } else {
        CandleTint::Red
    };

    Candle {
        pos: Vec2::new(config.playfield_width, config.floor_y() - height),
        size: Vec2::new(config.candle_width, height),
        tint,
    }
}

fn new_pump<R: Rng>(rng: &mut R, config: &Config) -> Pump {
    let y = config.pump_min_y + rng.random::<f32>() * config.pump_band;
    Pump {
        pos: Vec2::new(config.playfield_width, y),
        size: Vec2::splat(config.pump_size),
        active: true,
    }
}

//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`], so a restart is a single
//! struct replacement.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Aabb;
use super::input::InputBuffer;
use super::score::ScoreState;
use super::spawn::Spawner;
use crate::config::Config;
use crate::consts::{SPRITE_FRAMES, SPRITE_FRAME_TIME};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Hit a candle; frozen until restart
    Over,
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Jumped,
    CandleSpawned { height: f32 },
    PumpSpawned { y: f32 },
    PumpCollected { multiplier: u32 },
    MultiplierExpired,
    GameOver { final_score: u64 },
}

/// The player body. Fixed horizontally; the world scrolls past it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub vy: f32,
    pub airborne: bool,
}

impl Actor {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.actor_start_x, config.actor_start_y),
            size: Vec2::new(config.actor_width, config.actor_height),
            vy: 0.0,
            airborne: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn apply_gravity(&mut self, gravity: f32, max_fall_speed: f32, dt: f32) {
        self.vy = (self.vy + gravity * dt).min(max_fall_speed);
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos.y += self.vy * dt;
    }

    /// Snap to the floor if the bottom edge reached it. Returns true on contact.
    pub fn clamp_to_floor(&mut self, floor_y: f32) -> bool {
        if self.pos.y + self.size.y >= floor_y {
            self.pos.y = floor_y - self.size.y;
            self.vy = 0.0;
            self.airborne = false;
            return true;
        }
        false
    }

    /// Launch upward
    pub fn jump(&mut self, jump_force: f32) {
        self.vy = jump_force;
        self.airborne = true;
    }
}

/// Candle color. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandleTint {
    Green,
    Red,
}

/// An obstacle rising from the floor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub pos: Vec2,
    pub size: Vec2,
    pub tint: CandleTint,
}

impl Candle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A multiplier pickup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pump {
    pub pos: Vec2,
    pub size: Vec2,
    /// False once collected; the pump lingers until it scrolls off
    pub active: bool,
}

impl Pump {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// An entity that scrolls with the world
pub(crate) trait Scrolling {
    fn pos_mut(&mut self) -> &mut Vec2;
    fn right(&self) -> f32;
}

impl Scrolling for Candle {
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

impl Scrolling for Pump {
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Scroll every entity in a pool left and drop the ones fully off-screen
///
/// Everything moves at the same speed and spawns at the right edge, so the
/// front of the deque is always the leftmost entity.
pub(crate) fn scroll_pool<T: Scrolling>(pool: &mut VecDeque<T>, dx: f32) {
    for item in pool.iter_mut() {
        item.pos_mut().x -= dx;
    }
    while pool.front().is_some_and(|item| item.right() <= 0.0) {
        pool.pop_front();
    }
}

/// Sprite sheet frame cycling for the actor
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpriteAnimation {
    pub frame: u8,
    timer: f32,
}

impl SpriteAnimation {
    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer > SPRITE_FRAME_TIME {
            self.frame = (self.frame + 1) % SPRITE_FRAMES;
            self.timer = 0.0;
        }
    }
}

/// Complete mutable state of one run
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub actor: Actor,
    pub candles: VecDeque<Candle>,
    pub pumps: VecDeque<Pump>,
    pub score: ScoreState,
    pub input: InputBuffer,
    pub spawner: Spawner,
    pub sprite: SpriteAnimation,
    /// Simulated seconds since the run started
    pub elapsed: f64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            actor: Actor::new(config),
            candles: VecDeque::new(),
            pumps: VecDeque::new(),
            score: ScoreState::new(),
            input: InputBuffer::new(),
            spawner: Spawner::new(),
            sprite: SpriteAnimation::default(),
            elapsed: 0.0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Throw away the current run and start over
    pub fn restart(&mut self, config: &Config, seed: u64) {
        *self = Self::new(config, seed);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

//! Per-frame simulation tick
//!
//! Advances the game state by one variable `dt` in a fixed order:
//! input, gravity, integrate, floor, jump, hold cap, candles, pumps,
//! pump pickup, multiplier countdown, candle hit, score, sprite.

use super::collision::{hits_candle, hits_pump};
use super::input::InputEvent;
use super::state::{GameEvent, GamePhase, GameState, scroll_pool};
use crate::config::Config;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Host timestamp of this frame (seconds), used for jump buffering
    pub now: f64,
    /// Jump key edges received since the previous tick, oldest first
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn at(now: f64) -> Self {
        Self {
            now,
            events: Vec::new(),
        }
    }
}

/// Advance the game state by `dt` seconds. Does nothing once the run is over.
pub fn tick(state: &mut GameState, config: &Config, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::Over {
        return;
    }
    state.events.clear();

    for &event in &input.events {
        state.input.apply(event, &mut state.actor, config);
    }

    // Actor physics
    state.actor.apply_gravity(config.gravity, config.max_fall_speed, dt);
    state.actor.integrate(dt);
    if state.actor.clamp_to_floor(config.floor_y()) {
        state.input.land();
    }

    // Jump
    if state.input.try_jump(&mut state.actor, input.now, config) {
        log::trace!("jump at t={:.3}", state.elapsed);
        state.events.push(GameEvent::Jumped);
    }
    state.input.update_hold(dt, config);

    let scroll = config.scroll_speed * dt;

    // Candles
    scroll_pool(&mut state.candles, scroll);
    let last = state.candles.back();
    if let Some(candle) = state.spawner.spawn_candle(last, &mut state.rng, dt, config) {
        log::debug!("candle spawned: h={:.1} {:?}", candle.size.y, candle.tint);
        state.events.push(GameEvent::CandleSpawned {
            height: candle.size.y,
        });
        state.candles.push_back(candle);
    }

    // Pumps
    scroll_pool(&mut state.pumps, scroll);
    if let Some(pump) = state.spawner.spawn_pump(&mut state.rng, dt, config) {
        log::debug!("pump spawned at y={:.1}", pump.pos.y);
        state.events.push(GameEvent::PumpSpawned { y: pump.pos.y });
        state.pumps.push_back(pump);
    }

    // Pump pickup
    let actor = state.actor.bounds();
    for pump in state.pumps.iter_mut() {
        if pump.active && hits_pump(&actor, &pump.bounds()) {
            pump.active = false;
            state.score.collect(config.multiplier_policy, config.multiplier_duration);
            log::debug!("pump collected, multiplier x{}", state.score.multiplier);
            state.events.push(GameEvent::PumpCollected {
                multiplier: state.score.multiplier,
            });
        }
    }
    if state.score.decay(dt) {
        log::debug!("multiplier expired");
        state.events.push(GameEvent::MultiplierExpired);
    }

    // Candle hit ends the run before this tick's score accrues
    if state
        .candles
        .iter()
        .any(|candle| hits_candle(&actor, &candle.bounds()))
    {
        state.phase = GamePhase::Over;
        let final_score = state.score.truncated();
        log::info!(
            "game over after {:.2}s, score {}",
            state.elapsed,
            final_score
        );
        state.events.push(GameEvent::GameOver { final_score });
        return;
    }

    state.score.accrue(config.base_score_rate, dt);
    state.elapsed += dt as f64;
    state.sprite.advance(dt);
}

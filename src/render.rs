//! Render boundary
//!
//! The simulation never draws. Each frame the runner hands a read-only
//! [`FrameView`] to a [`RenderSink`]; whatever the sink does (canvas, terminal,
//! JSON trace, nothing) cannot stall or alter the tick.

use std::collections::VecDeque;

use serde::Serialize;

use crate::config::Config;
use crate::sim::{Actor, Candle, GamePhase, GameState, Pump, ScoreState};

/// Snapshot of everything a frame needs to draw
#[derive(Debug, Serialize)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub actor: &'a Actor,
    /// Sprite sheet column for the actor
    pub sprite_frame: u8,
    pub candles: &'a VecDeque<Candle>,
    /// Uncollected pumps only
    pub pumps: Vec<&'a Pump>,
    pub score: &'a ScoreState,
    /// Current points per second
    pub rate: f64,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState, config: &Config) -> Self {
        Self {
            phase: state.phase,
            actor: &state.actor,
            sprite_frame: state.sprite.frame,
            candles: &state.candles,
            pumps: state.pumps.iter().filter(|p| p.active).collect(),
            score: &state.score,
            rate: state.score.rate(config.base_score_rate),
        }
    }
}

/// Draws frames. Return values are never consumed.
pub trait RenderSink {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Sink that draws nothing (headless runs, missing assets)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _view: &FrameView<'_>) {}
}

/// HUD text for a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub rate: String,
    /// Shown while a multiplier is active
    pub banner: Option<String>,
    /// Label drawn on each pump
    pub pump_label: String,
    /// Game over overlay text
    pub game_over: Option<String>,
}

impl Hud {
    pub fn from_view(view: &FrameView<'_>) -> Self {
        let multiplier = view.score.multiplier;
        Self {
            score: format!("Score: {:.1}", view.score.score),
            rate: format!("Rate: {} pps", view.rate.round() as u64),
            banner: (multiplier > 1).then(|| format!("{multiplier}X PUMP MODE!")),
            pump_label: format!("×{multiplier}"),
            game_over: (view.phase == GamePhase::Over)
                .then(|| format!("Your Score: {}", view.score.truncated())),
        }
    }
}

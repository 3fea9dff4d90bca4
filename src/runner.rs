//! Frame driver
//!
//! Owns the game state, the frame clock and the pending input queue. The host
//! calls [`Runner::frame`] once per animation frame and keeps scheduling frames
//! while it returns [`FrameControl::Continue`].

use std::collections::VecDeque;

use crate::clock::FrameClock;
use crate::config::{Config, ConfigError};
use crate::render::{FrameView, RenderSink};
use crate::sim::{GameEvent, GameState, InputEvent, TickInput, tick};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// Receives run lifecycle notifications (game over overlay, restart)
pub trait LifecycleSink {
    /// The run ended with this truncated score
    fn game_over(&mut self, final_score: u64);
    /// A new run started
    fn restarted(&mut self) {}
}

/// Lifecycle sink that ignores everything
impl LifecycleSink for () {
    fn game_over(&mut self, _final_score: u64) {}
}

pub struct Runner {
    config: Config,
    state: GameState,
    clock: FrameClock,
    pending: VecDeque<InputEvent>,
    runs: u64,
}

impl Runner {
    /// Validate `config` and start the first run at host time `now`
    pub fn new(config: Config, seed: u64, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("Candle Runner starting with seed {}", seed);
        Ok(Self {
            state: GameState::new(&config, seed),
            clock: FrameClock::new(now, config.max_frame_dt),
            config,
            pending: VecDeque::new(),
            runs: 1,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of runs started, including the current one
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Jump key pressed at host time `at`
    pub fn on_press(&mut self, at: f64) {
        self.queue(InputEvent::press(at));
    }

    /// Jump key released at host time `at`
    pub fn on_release(&mut self, at: f64) {
        self.queue(InputEvent::release(at));
    }

    fn queue(&mut self, event: InputEvent) {
        // Input during game over would otherwise leak into the next run
        if !self.state.is_over() {
            self.pending.push_back(event);
        }
    }

    /// Run one host frame: tick, render, report
    pub fn frame(
        &mut self,
        now: f64,
        render: &mut impl RenderSink,
        lifecycle: &mut impl LifecycleSink,
    ) -> FrameControl {
        let dt = self.clock.delta(now);

        if !self.state.is_over() {
            let input = TickInput {
                now,
                events: self.pending.drain(..).collect(),
            };
            tick(&mut self.state, &self.config, &input, dt);
        }

        render.render(&FrameView::new(&self.state, &self.config));

        for event in &self.state.events {
            if let GameEvent::GameOver { final_score } = *event {
                lifecycle.game_over(final_score);
            }
        }
        // Events are reported once
        self.state.events.clear();

        if self.state.is_over() {
            FrameControl::Stop
        } else {
            FrameControl::Continue
        }
    }

    /// Start a new run. Safe to call at any time, including mid-run.
    pub fn restart(&mut self, now: f64, lifecycle: &mut impl LifecycleSink) -> FrameControl {
        let seed = self.state.seed.wrapping_add(1);
        self.restart_with_seed(seed, now, lifecycle)
    }

    /// Start a new run with an explicit seed
    pub fn restart_with_seed(
        &mut self,
        seed: u64,
        now: f64,
        lifecycle: &mut impl LifecycleSink,
    ) -> FrameControl {
        self.state.restart(&self.config, seed);
        self.clock.reset(now);
        self.pending.clear();
        self.runs += 1;
        log::info!("Run {} restarted with seed {}", self.runs, seed);
        lifecycle.restarted();
        FrameControl::Continue
    }
}

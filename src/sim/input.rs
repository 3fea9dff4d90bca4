//! Jump input interpretation
//!
//! Press/release edges are queued by the host and applied at the start of a
//! tick. A press is buffered for a short window so a jump pressed just before
//! landing still fires. Releasing early while rising halves the upward
//! velocity, giving variable jump height; holding past the cap auto-releases.

use serde::Serialize;

use super::state::Actor;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputKind {
    Press,
    Release,
}

/// A jump key edge with its host timestamp (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputEvent {
    pub kind: InputKind,
    pub at: f64,
}

impl InputEvent {
    pub fn press(at: f64) -> Self {
        Self {
            kind: InputKind::Press,
            at,
        }
    }

    pub fn release(at: f64) -> Self {
        Self {
            kind: InputKind::Release,
            at,
        }
    }
}

/// Jump phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum JumpState {
    Grounded,
    /// In a jump; `held` is how long the key has been held since takeoff
    Ascending { held: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBuffer {
    /// Timestamp of an unconsumed press
    pub requested_at: Option<f64>,
    /// Jump key is physically down
    pub key_down: bool,
    /// The press that started the current jump is still extending it.
    /// Cleared by its release or by the hold cap.
    pub hold_active: bool,
    pub jump: JumpState,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self {
            requested_at: None,
            key_down: false,
            hold_active: false,
            jump: JumpState::Grounded,
        }
    }
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds the key has been held in the current jump
    pub fn hold_time(&self) -> f32 {
        match self.jump {
            JumpState::Grounded => 0.0,
            JumpState::Ascending { held } => held,
        }
    }

    /// Apply one queued edge
    pub fn apply(&mut self, event: InputEvent, actor: &mut Actor, config: &Config) {
        match event.kind {
            InputKind::Press => {
                // Key repeat while down is not a new press
                if !self.key_down {
                    self.requested_at = Some(event.at);
                }
                self.key_down = true;
            }
            InputKind::Release => {
                self.key_down = false;
                if !self.hold_active {
                    return;
                }
                self.hold_active = false;
                if actor.vy < 0.0 && self.hold_time() < config.max_jump_hold {
                    actor.vy *= 0.5;
                }
            }
        }
    }

    /// Start a jump if grounded and a press is still inside the buffer window
    pub fn try_jump(&mut self, actor: &mut Actor, now: f64, config: &Config) -> bool {
        if actor.airborne {
            return false;
        }
        let Some(pressed_at) = self.requested_at else {
            return false;
        };
        if now - pressed_at >= config.jump_buffer {
            return false;
        }

        actor.jump(config.jump_force);
        self.requested_at = None;
        self.jump = JumpState::Ascending { held: 0.0 };
        // A buffered press may already have been released before landing
        self.hold_active = self.key_down;
        true
    }

    /// Accumulate hold time while the jump's own press is still down
    pub fn update_hold(&mut self, dt: f32, config: &Config) {
        if !self.hold_active {
            return;
        }
        if let JumpState::Ascending { ref mut held } = self.jump {
            *held += dt;
            if *held > config.max_jump_hold {
                self.hold_active = false;
            }
        }
    }

    /// Back on the floor
    pub fn land(&mut self) {
        self.jump = JumpState::Grounded;
        self.hold_active = false;
    }
}

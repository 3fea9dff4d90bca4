//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable pool order (spawn order, oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, hits_candle, hits_pump};
pub use input::{InputBuffer, InputEvent, InputKind, JumpState};
pub use score::ScoreState;
pub use spawn::Spawner;
pub use state::{Actor, Candle, CandleTint, GameEvent, GamePhase, GameState, Pump, SpriteAnimation};
pub use tick::{TickInput, tick};

//! Axis-aligned collision tests
//!
//! All tests use strict inequalities: rectangles that only share an edge do
//! not overlap.

use glam::Vec2;
use serde::Serialize;

/// Axis-aligned box, `pos` is the top-left corner (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal extents overlap
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Full four-edge overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// Actor vs candle test
///
/// Candles rise from the floor, so vertically only the candle's top edge
/// matters: anything below it counts as inside.
pub fn hits_candle(actor: &Aabb, candle: &Aabb) -> bool {
    actor.overlaps_x(candle) && actor.bottom() > candle.top()
}

/// Actor vs pump test (full overlap)
pub fn hits_pump(actor: &Aabb, pump: &Aabb) -> bool {
    actor.overlaps(pump)
}

//! Fundamental geometric and timing types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// 2D position in screen space (pixels, origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a point onto the surface, inclusive of both edges.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}

/// Frame timing. The clock is injected by the caller each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated ticks (frames) since the session started.
    pub tick: u64,
    /// Monotonic timestamp of the latest tick in milliseconds.
    pub now_ms: f64,
}

impl SimTime {
    /// Advance by one tick, stamped with the caller's clock reading.
    pub fn advance(&mut self, now_ms: f64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}

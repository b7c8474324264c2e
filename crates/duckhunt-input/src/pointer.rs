//! Landmark-to-screen projection and crosshair smoothing.

use glam::Vec2;

use duckhunt_core::types::Viewport;

use crate::landmarks::HandLandmark;

/// Project a normalized landmark onto the screen.
///
/// The horizontal axis is mirrored so the crosshair follows the hand like a
/// reflection, and offsets from the frame centre are scaled by `sensitivity`.
/// The result is clamped to the surface.
pub fn project(landmark: &HandLandmark, viewport: &Viewport, sensitivity: f32) -> Vec2 {
    let x = (0.5 + (0.5 - landmark.x) * sensitivity) * viewport.width;
    let y = (0.5 + (landmark.y - 0.5) * sensitivity) * viewport.height;
    viewport.clamp(Vec2::new(x, y))
}

/// First-order low-pass filter over the crosshair position.
#[derive(Debug, Clone, Copy)]
pub struct PointerSmoother {
    position: Vec2,
}

impl PointerSmoother {
    pub fn new(start: Vec2) -> Self {
        Self { position: start }
    }

    /// Move a fraction `factor` of the way toward `target`.
    pub fn update(&mut self, target: Vec2, factor: f32) -> Vec2 {
        self.position += (target - self.position) * factor;
        self.position
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
    }
}

//! Input tuning.

use serde::{Deserialize, Serialize};

/// Tunables for pointer mapping and pinch detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Amplifies hand motion around the frame centre so small movements
    /// cover the whole screen.
    pub sensitivity: f32,
    /// Exponential smoothing factor in (0, 1]. Higher is snappier, lower is smoother.
    pub smoothing: f32,
    /// Thumb-tip to index-tip distance (normalized) below which the hand is pinching.
    pub pinch_threshold: f32,
    /// Minimum time between two fire events (ms).
    pub debounce_ms: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sensitivity: 1.5,
            smoothing: 0.25,
            pinch_threshold: 0.08,
            debounce_ms: 350.0,
        }
    }
}

impl InputConfig {
    /// Smoothing factor forced into (0, 1] so the filter can never overshoot or stall.
    pub fn effective_smoothing(&self) -> f32 {
        if self.smoothing.is_finite() && self.smoothing > 0.0 {
            self.smoothing.min(1.0)
        } else {
            Self::default().smoothing
        }
    }
}

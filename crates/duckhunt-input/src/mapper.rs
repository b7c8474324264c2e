//! Per-frame input mapping: landmarks in, crosshair and trigger out.

use duckhunt_core::types::{Position, Viewport};

use crate::config::InputConfig;
use crate::landmarks::HandSample;
use crate::pinch::PinchDetector;
use crate::pointer::{project, PointerSmoother};

/// Result of mapping one frame's sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputFrame {
    /// Smoothed crosshair position in screen pixels.
    pub pointer: Position,
    pub hand_visible: bool,
    pub pinching: bool,
    /// At most one fire event per frame.
    pub fire: bool,
}

/// Owns the pointer filter and the pinch detector.
#[derive(Debug, Clone)]
pub struct InputMapper {
    config: InputConfig,
    pointer: PointerSmoother,
    pinch: PinchDetector,
}

impl InputMapper {
    pub fn new(config: InputConfig, viewport: &Viewport) -> Self {
        Self {
            config,
            pointer: PointerSmoother::new(viewport.center().to_vec2()),
            pinch: PinchDetector::new(config.pinch_threshold, config.debounce_ms),
        }
    }

    /// Map this frame's sample. With no hand the pointer holds still and
    /// nothing fires; the pinch edge state is kept as it was.
    pub fn update(
        &mut self,
        sample: Option<&HandSample>,
        viewport: &Viewport,
        now_ms: f64,
    ) -> InputFrame {
        let Some(sample) = sample else {
            return InputFrame {
                pointer: self.pointer.position().into(),
                hand_visible: false,
                pinching: self.pinch.is_pinching(),
                fire: false,
            };
        };

        let target = project(&sample.palm_base(), viewport, self.config.sensitivity);
        let pointer = self
            .pointer
            .update(target, self.config.effective_smoothing());
        let fire = self.pinch.update(sample.pinch_distance(), now_ms);

        InputFrame {
            pointer: pointer.into(),
            hand_visible: true,
            pinching: self.pinch.is_pinching(),
            fire,
        }
    }

    pub fn pointer(&self) -> Position {
        self.pointer.position().into()
    }

    /// Re-centre the crosshair and clear the debounce window (new game).
    pub fn reset(&mut self, viewport: &Viewport) {
        self.pointer.reset(viewport.center().to_vec2());
        self.pinch.reset();
    }

    /// Keep the crosshair on the surface after a resize.
    pub fn clamp_to(&mut self, viewport: &Viewport) {
        let clamped = viewport.clamp(self.pointer.position());
        self.pointer.reset(clamped);
    }
}

//! Pinch gesture detection with rising-edge trigger and debounce.

use tracing::debug;

/// Turns a stream of thumb/index distances into discrete fire events.
#[derive(Debug, Clone)]
pub struct PinchDetector {
    threshold: f32,
    debounce_ms: f64,
    was_pinching: bool,
    last_fire_ms: Option<f64>,
}

impl PinchDetector {
    pub fn new(threshold: f32, debounce_ms: f64) -> Self {
        Self {
            threshold,
            debounce_ms,
            was_pinching: false,
            last_fire_ms: None,
        }
    }

    /// Feed one distance sample. Returns true when this sample fires.
    ///
    /// Fires only on the transition into the pinching state, and only if the
    /// previous fire event is at least `debounce_ms` old. A rising edge inside
    /// the debounce window is consumed without firing.
    pub fn update(&mut self, distance: f32, now_ms: f64) -> bool {
        let pinching = distance < self.threshold;
        let rising = pinching && !self.was_pinching;
        self.was_pinching = pinching;

        if !rising {
            return false;
        }

        let cooled_down = self
            .last_fire_ms
            .map_or(true, |last| now_ms - last >= self.debounce_ms);
        if !cooled_down {
            debug!(distance, now_ms, "pinch inside debounce window ignored");
            return false;
        }

        self.last_fire_ms = Some(now_ms);
        debug!(distance, now_ms, "pinch fire");
        true
    }

    pub fn is_pinching(&self) -> bool {
        self.was_pinching
    }

    /// Forget the debounce history. The current pinch state is kept, so a
    /// pinch held through a restart still needs a release before it fires.
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}

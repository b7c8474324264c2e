//! Frame loop. Steps the simulation once per `requestAnimationFrame` and
//! hands the result to the HUD and canvas.
//!
//! `GameLoop` is the browser-independent part: it owns the engine and the
//! latest hand sample and turns a timestamp into a snapshot plus draw list.
//! The rAF plumbing at the bottom drives it through the thread-local app state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use duckhunt_core::commands::PlayerCommand;
use duckhunt_core::enums::GamePhase;
use duckhunt_core::state::GameStateSnapshot;
use duckhunt_input::HandSample;
use duckhunt_sim::render::{build_draw_list, DrawCommand};
use duckhunt_sim::{SimConfig, SimulationEngine};

use crate::errors::{describe_js, SessionError};
use crate::state::APP_STATE;

/// Owns the engine between frames.
pub struct GameLoop {
    engine: SimulationEngine,
    /// Most recent detector result. Reused until replaced or cleared, so a
    /// detector slower than the display does not blink the hand out.
    hand: Option<HandSample>,
    latest: GameStateSnapshot,
}

impl GameLoop {
    pub fn new(config: SimConfig) -> Self {
        let engine = SimulationEngine::new(config);
        let latest = engine.peek_snapshot();
        Self {
            engine,
            hand: None,
            latest,
        }
    }

    pub fn set_hand(&mut self, hand: Option<HandSample>) {
        self.hand = hand;
    }

    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.engine.queue_command(command);
    }

    /// Advance one frame. Returns the draw list for the new state.
    pub fn step(&mut self, now_ms: f64) -> Vec<DrawCommand> {
        self.latest = self.engine.tick(now_ms, self.hand.as_ref());
        build_draw_list(&self.latest)
    }

    /// The page went hidden. Pauses immediately, since no frame will run
    /// to process a queued command until the page is visible again.
    pub fn suspend(&mut self, now_ms: f64) {
        if self.engine.phase() == GamePhase::Playing {
            self.engine.queue_command(PlayerCommand::Pause);
            self.latest = self.engine.tick(now_ms, None);
        }
    }

    /// The page is visible again. The resume lands on the next frame, whose
    /// timestamp closes the paused interval.
    pub fn resume(&mut self) {
        if self.engine.phase() == GamePhase::Paused {
            self.engine.queue_command(PlayerCommand::Resume);
        }
    }

    pub fn latest(&self) -> &GameStateSnapshot {
        &self.latest
    }

    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }
}

/// Start the `requestAnimationFrame` loop. Each frame runs
/// `AppState::run_frame`; the loop lives for the rest of the page.
pub fn start_animation_loop() -> Result<(), SessionError> {
    let window = web_sys::window().ok_or(SessionError::NoWindow)?;

    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let callback_loop = callback.clone();
    let window_loop = window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        APP_STATE.with_borrow_mut(|state| state.run_frame(now_ms));
        if let Some(cb) = callback_loop.borrow().as_ref() {
            if let Err(e) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                tracing::warn!(error = %describe_js(&e), "requestAnimationFrame failed; loop stopped");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = callback.borrow().as_ref() {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| SessionError::Canvas(describe_js(&e)))?;
    }
    Ok(())
}

/// Pause the engine while the tab is hidden and resume when it returns.
pub fn watch_visibility() -> Result<(), SessionError> {
    let window = web_sys::window().ok_or(SessionError::NoWindow)?;
    let document = window.document().ok_or(SessionError::NoDocument)?;
    let document_cb = document.clone();

    let on_change = Closure::wrap(Box::new(move || {
        let now_ms = window.performance().map_or(0.0, |p| p.now());
        let hidden = document_cb.visibility_state() == web_sys::VisibilityState::Hidden;
        APP_STATE.with_borrow_mut(|state| {
            if let Some(game) = state.game.as_mut() {
                if hidden {
                    game.suspend(now_ms);
                } else {
                    game.resume();
                }
            }
        });
        tracing::debug!(hidden, now_ms, "visibility changed");
    }) as Box<dyn FnMut()>);

    document
        .add_event_listener_with_callback("visibilitychange", on_change.as_ref().unchecked_ref())
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?;
    on_change.forget();
    Ok(())
}

//! `#[wasm_bindgen]` entry points called by the page.
//!
//! They bridge page requests to the game loop through the thread-local app
//! state. Malformed input is logged and ignored; only session setup and
//! explicit commands report errors back to the caller.

use wasm_bindgen::prelude::*;

use duckhunt_core::commands::PlayerCommand;
use duckhunt_input::HandSample;
use duckhunt_sim::SimConfig;

use crate::canvas::CanvasSurface;
use crate::errors::SessionError;
use crate::game_loop::{self, GameLoop};
use crate::hud::{set_status, Hud};
use crate::state::APP_STATE;

const CANVAS_ID: &str = "game-canvas";
const BACKGROUND_ID: &str = "background";
const SHEET_ID: &str = "duck-sheet";

/// Parse an optional JSON config. Blank input means all defaults.
/// The flag is true when the page fixed the viewport itself; otherwise the
/// canvas size is used.
pub fn parse_config(config_json: &str) -> Result<(SimConfig, bool), SessionError> {
    if config_json.trim().is_empty() {
        return Ok((SimConfig::default(), false));
    }
    let value: serde_json::Value = serde_json::from_str(config_json)?;
    let has_viewport = value.get("viewport").is_some();
    Ok((serde_json::from_value(value)?, has_viewport))
}

/// Attach to the page and create the engine. The game waits in the menu
/// until `start_game`. Calling again replaces the session.
///
/// Page: `start_session('{"seed": 7, "hit_policy": "single_target"}')`
#[wasm_bindgen]
pub fn start_session(config_json: &str) -> Result<(), JsValue> {
    let (mut config, has_viewport) = parse_config(config_json)?;
    let window = web_sys::window().ok_or(SessionError::NoWindow)?;
    let document = window.document().ok_or(SessionError::NoDocument)?;

    let surface = CanvasSurface::attach(&document, CANVAS_ID, BACKGROUND_ID, SHEET_ID)
        .inspect_err(|e| set_status(&document, &e.to_string()))?;
    let hud = Hud::attach(&document)?;
    if !has_viewport {
        config.viewport = surface.viewport();
    }
    surface.resize(&config.viewport);

    tracing::info!(
        seed = config.seed,
        width = config.viewport.width,
        height = config.viewport.height,
        hit_policy = ?config.hit_policy,
        "session created"
    );

    let first_start = APP_STATE.with_borrow_mut(|state| {
        state.game = Some(GameLoop::new(config));
        state.surface = Some(surface);
        state.hud = Some(hud);
        !std::mem::replace(&mut state.running, true)
    });
    if first_start {
        game_loop::start_animation_loop()?;
        game_loop::watch_visibility()?;
    }
    Ok(())
}

/// The hand detector finished loading (or failed, with `false`).
#[wasm_bindgen]
pub fn set_detector_ready(ready: bool) {
    APP_STATE.with_borrow_mut(|state| state.detector_ready = ready);
    tracing::info!(ready, "detector status");
}

/// Start or restart a game. Refused until the detector is ready.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    APP_STATE.with_borrow_mut(|state| {
        if !state.detector_ready {
            return Err(SessionError::DetectorNotReady);
        }
        let game = state.game.as_mut().ok_or(SessionError::NotStarted)?;
        game.queue_command(PlayerCommand::StartGame);
        Ok(())
    })?;
    Ok(())
}

/// Hand this frame's detector output to the game: `num_hands` hands of 21
/// landmarks × (x, y, z), flattened. Only the first hand is used.
#[wasm_bindgen]
pub fn submit_hand_landmarks(flat_data: &[f32], num_hands: usize) {
    let hand = if num_hands == 0 {
        None
    } else {
        match HandSample::from_flat(flat_data) {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::debug!(error = %e, "landmark sample ignored");
                return;
            }
        }
    };
    APP_STATE.with_borrow_mut(|state| {
        if let Some(game) = state.game.as_mut() {
            game.set_hand(hand);
        }
    });
}

/// The detector reports no hand.
#[wasm_bindgen]
pub fn clear_hand() {
    APP_STATE.with_borrow_mut(|state| {
        if let Some(game) = state.game.as_mut() {
            game.set_hand(None);
        }
    });
}

/// Forward a JSON-encoded player command, e.g. `{"type": "Pause"}`.
#[wasm_bindgen]
pub fn send_command(command_json: &str) -> Result<(), JsValue> {
    let command: PlayerCommand = serde_json::from_str(command_json).map_err(SessionError::from)?;
    APP_STATE.with_borrow_mut(|state| {
        let game = state.game.as_mut().ok_or(SessionError::NotStarted)?;
        game.queue_command(command);
        Ok::<(), SessionError>(())
    })?;
    Ok(())
}

/// The window changed size. The canvas follows immediately; the engine on
/// its next frame.
#[wasm_bindgen]
pub fn resize_viewport(width: f32, height: f32) {
    APP_STATE.with_borrow_mut(|state| {
        if let Some(game) = state.game.as_mut() {
            game.queue_command(PlayerCommand::ResizeViewport { width, height });
        }
        if let Some(surface) = state.surface.as_ref() {
            surface.resize(&duckhunt_core::types::Viewport::new(width, height));
        }
    });
}

/// Latest snapshot as JSON, for polling and debugging.
#[wasm_bindgen]
pub fn get_snapshot() -> Result<String, JsValue> {
    let json = APP_STATE.with_borrow(|state| {
        let game = state.game.as_ref().ok_or(SessionError::NotStarted)?;
        serde_json::to_string(game.latest()).map_err(SessionError::from)
    })?;
    Ok(json)
}

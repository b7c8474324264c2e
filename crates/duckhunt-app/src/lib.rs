//! DUCKHUNT browser shell.
//!
//! This crate wires the simulation crates to the page: `#[wasm_bindgen]`
//! entry points for the session, landmark submission and commands, a
//! `requestAnimationFrame` loop, HUD sync, canvas drawing and camera access.

pub mod camera;
pub mod canvas;
pub mod errors;
pub mod game_loop;
pub mod hud;
pub mod ipc;
pub mod logging;
pub mod sprites;
pub mod state;

pub use duckhunt_core as core;

use wasm_bindgen::prelude::*;

/// Called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(cfg!(debug_assertions));
}

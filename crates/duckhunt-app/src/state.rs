//! Application state shared by the exported entry points and the frame loop.
//!
//! WASM is single-threaded, so the state lives in a thread-local `RefCell`
//! instead of behind a lock. Nothing here is touched re-entrantly: every
//! entry point borrows, does its work, and returns.

use std::cell::RefCell;

use crate::canvas::CanvasSurface;
use crate::game_loop::GameLoop;
use crate::hud::Hud;

#[derive(Default)]
pub struct AppState {
    /// `None` before `start_session` is called.
    pub game: Option<GameLoop>,
    pub surface: Option<CanvasSurface>,
    pub hud: Option<Hud>,
    /// Set by the page once the hand detector has loaded its model.
    pub detector_ready: bool,
    /// Whether the animation loop and visibility listener are installed.
    pub running: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One display frame: step the simulation, sync the HUD, then draw.
    pub fn run_frame(&mut self, now_ms: f64) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let draw_list = game.step(now_ms);
        if let Some(hud) = self.hud.as_mut() {
            hud.sync(game.latest());
        }
        if let Some(surface) = self.surface.as_ref() {
            surface.draw(&draw_list);
        }
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use duckhunt_sim::SimConfig;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.game.is_none());
        assert!(state.surface.is_none());
        assert!(!state.detector_ready);
        assert!(!state.running);
    }

    #[test]
    fn test_run_frame_without_surface_still_steps() {
        let mut state = AppState::new();
        state.run_frame(0.0);

        state.game = Some(GameLoop::new(SimConfig::default()));
        if let Some(game) = state.game.as_mut() {
            game.queue_command(duckhunt_core::commands::PlayerCommand::StartGame);
        }
        state.run_frame(0.0);
        let ducks = state.game.as_ref().map(|g| g.latest().ducks.len());
        assert_eq!(ducks, Some(1));
    }
}

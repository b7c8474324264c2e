//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no browser dependency), and the clock is injected on every tick, so tests
//! drive it with a fake timeline.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use duckhunt_core::commands::PlayerCommand;
use duckhunt_core::components::{Flight, Lifetime};
use duckhunt_core::constants::*;
use duckhunt_core::enums::{GamePhase, HitPolicy};
use duckhunt_core::events::GameEvent;
use duckhunt_core::state::{CrosshairView, GameStateSnapshot};
use duckhunt_core::types::{Position, SimTime, Viewport};

use duckhunt_duck_ai::difficulty::hit_radius;
use duckhunt_input::{HandSample, InputConfig, InputMapper};

use crate::round::RoundTracker;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::timers::{PendingTimers, TimedAction};

/// Configuration for starting a new simulation.
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub viewport: Viewport,
    pub input: InputConfig,
    pub hit_policy: HitPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            input: InputConfig::default(),
            hit_policy: HitPolicy::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    viewport: Viewport,
    hit_policy: HitPolicy,
    rng: ChaCha8Rng,
    /// Never reset, so ids stay unique across restarts.
    next_duck_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    input: InputMapper,
    crosshair: CrosshairView,
    round: RoundTracker,
    timers: PendingTimers,
    /// Round whose level-up banner is showing.
    banner: Option<u32>,
    paused_at_ms: Option<f64>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Starts in the menu.
    pub fn new(config: SimConfig) -> Self {
        let viewport = sanitize_viewport(config.viewport);
        let input = InputMapper::new(config.input, &viewport);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            viewport,
            hit_policy: config.hit_policy,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_duck_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            crosshair: CrosshairView {
                position: input.pointer(),
                ..Default::default()
            },
            input,
            round: RoundTracker::new(0.0),
            timers: PendingTimers::default(),
            banner: None,
            paused_at_ms: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the game by one frame and return the resulting snapshot.
    ///
    /// `now_ms` is a monotonic timestamp; `hand` is this frame's detector
    /// result, `None` when no hand was found.
    pub fn tick(&mut self, now_ms: f64, hand: Option<&HandSample>) -> GameStateSnapshot {
        self.process_commands(now_ms);

        match self.phase {
            GamePhase::Playing => {
                self.run_systems(now_ms, hand);
                self.time.advance(now_ms);
            }
            GamePhase::Menu | GamePhase::GameOver => {
                // The crosshair still follows the hand, but nothing fires.
                let frame = self.input.update(hand, &self.viewport, now_ms);
                self.crosshair = CrosshairView {
                    position: frame.pointer,
                    hand_visible: frame.hand_visible,
                    pinching: frame.pinching,
                };
            }
            GamePhase::Paused => {}
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state without advancing anything.
    /// Events are only drained by `tick`.
    pub fn peek_snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world, self.snapshot_inputs(), Vec::new())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get the progression state (score, round, ammo, strikes).
    pub fn round(&self) -> &RoundTracker {
        &self.round
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a duck at an exact position (for tests needing a known target).
    #[cfg(test)]
    pub fn spawn_test_duck_at(&mut self, position: Position, waypoint: Position) -> u64 {
        let id = self.next_duck_id;
        self.next_duck_id += 1;
        crate::world_setup::spawn_duck_at(
            &mut self.world,
            id,
            self.round.round,
            position,
            waypoint,
            self.time.now_ms,
        );
        id
    }

    /// Mutable world access (for tests that clear or rearrange ducks).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the pending timers.
    #[cfg(test)]
    pub fn timers(&self) -> &PendingTimers {
        &self.timers
    }

    /// Mutable progression state (for tests that set up a specific situation).
    #[cfg(test)]
    pub fn round_mut(&mut self) -> &mut RoundTracker {
        &mut self.round
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now_ms: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now_ms);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, now_ms: f64) {
        match command {
            PlayerCommand::StartGame => {
                self.reset(now_ms);
                self.phase = GamePhase::Playing;
                info!(now_ms, best_score = self.round.best_score, "game started");
            }
            PlayerCommand::ReturnToMenu => {
                self.reset(now_ms);
                self.phase = GamePhase::Menu;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                    self.paused_at_ms = Some(now_ms);
                    debug!(now_ms, "paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    let paused_for = self
                        .paused_at_ms
                        .take()
                        .map_or(0.0, |at| (now_ms - at).max(0.0));
                    self.shift_clocks(paused_for);
                    self.phase = GamePhase::Playing;
                    debug!(paused_for, "resumed");
                }
            }
            PlayerCommand::ResizeViewport { width, height } => {
                self.viewport = sanitize_viewport(Viewport::new(width, height));
                self.input.clamp_to(&self.viewport);
                self.crosshair.position = self.input.pointer();
                for (_entity, flight) in self.world.query_mut::<&mut Flight>() {
                    flight.waypoint = self.viewport.clamp(flight.waypoint.to_vec2()).into();
                }
                debug!(width = self.viewport.width, height = self.viewport.height, "viewport resized");
            }
        }
    }

    /// Clear every piece of per-game state. The best score and the duck id
    /// counter survive.
    fn reset(&mut self, now_ms: f64) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.round.reset(now_ms);
        self.timers.clear();
        self.banner = None;
        self.paused_at_ms = None;
        self.input.reset(&self.viewport);
        self.crosshair = CrosshairView {
            position: self.input.pointer(),
            ..Default::default()
        };
        self.time = SimTime {
            tick: 0,
            now_ms,
        };
    }

    /// Move every clock forward so time spent paused does not count.
    fn shift_clocks(&mut self, by_ms: f64) {
        self.round.shift_clock(by_ms);
        self.timers.shift(by_ms);
        for (_entity, lifetime) in self.world.query_mut::<&mut Lifetime>() {
            lifetime.spawned_at_ms += by_ms;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_ms: f64, hand: Option<&HandSample>) {
        // 1. Duck FSM (movement, hit pause, fall, flee, lifetime)
        let escaped = systems::flight::run(
            &mut self.world,
            &mut self.rng,
            &self.viewport,
            now_ms,
            &mut self.despawn_buffer,
        );
        for duck_id in escaped {
            let game_over = self.round.register_escape();
            info!(duck_id, strikes = self.round.strikes, "duck escaped");
            self.events.push(GameEvent::DuckEscaped {
                duck_id,
                strikes: self.round.strikes,
            });
            if game_over {
                self.end_game();
                return;
            }
        }
        // 2. Cleanup (ducks that left the screen)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_duck_id,
            self.round.round,
            self.round.max_concurrent_ducks,
            &self.viewport,
            now_ms,
        );
        // 4. Input mapping
        let frame = self.input.update(hand, &self.viewport, now_ms);
        self.crosshair = CrosshairView {
            position: frame.pointer,
            hand_visible: frame.hand_visible,
            pinching: frame.pinching,
        };
        // 5. Shot resolution
        if frame.fire {
            self.fire(frame.pointer, now_ms);
        }
        // 6. Round clock
        if self.round.tick(now_ms) {
            info!(round = self.round.round, "round clock expired");
            self.on_level_up(now_ms);
        }
        // 7. Delayed actions
        self.run_timers(now_ms);
    }

    fn fire(&mut self, at: Position, now_ms: f64) {
        if !self.round.fire() {
            debug!("trigger pulled with empty magazine");
            self.events.push(GameEvent::ShotDropped);
            return;
        }
        self.events.push(GameEvent::ShotFired { at });

        let radius = hit_radius(&self.viewport);
        let hits = systems::shooting::resolve(&mut self.world, at, radius, self.hit_policy);
        for duck_id in &hits {
            let outcome = self.round.register_hit(now_ms);
            debug!(duck_id, points = outcome.points, score = self.round.score, "duck hit");
            self.events.push(GameEvent::DuckHit {
                duck_id: *duck_id,
                points: outcome.points,
            });
            if outcome.leveled_up {
                self.on_level_up(now_ms);
            }
        }

        if !hits.is_empty() {
            self.round.refill_ammo();
        } else if self.round.ammo == 0 && !self.timers.is_scheduled(TimedAction::Reload) {
            self.timers
                .schedule(now_ms + RELOAD_DELAY_MS, TimedAction::Reload);
        }
    }

    fn on_level_up(&mut self, now_ms: f64) {
        let round = self.round.round;
        info!(
            round,
            max_ducks = self.round.max_concurrent_ducks,
            "level up"
        );
        self.events.push(GameEvent::LevelUp { round });
        self.banner = Some(round);
        self.timers
            .schedule(now_ms + BANNER_DURATION_MS, TimedAction::HideBanner { round });
    }

    fn run_timers(&mut self, now_ms: f64) {
        for action in self.timers.take_due(now_ms) {
            match action {
                TimedAction::Reload => {
                    if self.phase == GamePhase::Playing && self.round.ammo == 0 {
                        self.round.refill_ammo();
                        self.events.push(GameEvent::Reloaded);
                    }
                }
                TimedAction::HideBanner { round } => {
                    if self.banner == Some(round) {
                        self.banner = None;
                    }
                }
            }
        }
    }

    fn end_game(&mut self) {
        let final_score = self.round.score;
        self.phase = GamePhase::GameOver;
        self.timers.clear();
        self.banner = None;
        self.events.push(GameEvent::GameOver { final_score });
        info!(
            final_score,
            round = self.round.round,
            best_score = self.round.best_score,
            "game over"
        );
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, self.snapshot_inputs(), events)
    }

    fn snapshot_inputs(&self) -> SnapshotInputs<'_> {
        let remaining_secs = match self.phase {
            GamePhase::Menu => ROUND_DURATION_SECS,
            GamePhase::Paused => self
                .round
                .remaining_secs(self.paused_at_ms.unwrap_or(self.time.now_ms)),
            GamePhase::Playing | GamePhase::GameOver => self.round.remaining_secs(self.time.now_ms),
        };
        SnapshotInputs {
            time: self.time,
            phase: self.phase,
            viewport: self.viewport,
            round: &self.round,
            remaining_secs,
            banner: self.banner,
            crosshair: self.crosshair.clone(),
        }
    }
}

/// Degenerate sizes (zero, negative, NaN) fall back to one pixel.
fn sanitize_viewport(viewport: Viewport) -> Viewport {
    let side = |v: f32| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
    Viewport::new(side(viewport.width), side(viewport.height))
}

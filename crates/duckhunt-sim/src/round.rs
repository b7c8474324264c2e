//! Round progression state and the round clock.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Nothing here can fail;
//! every operation clamps to the ranges the HUD expects.

use duckhunt_core::constants::*;
use duckhunt_duck_ai::difficulty::hit_reward;

/// Result of crediting one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    pub points: u32,
    /// The hit completed the round's kill quota.
    pub leveled_up: bool,
}

/// Running progression state tracked by the engine.
#[derive(Debug, Clone)]
pub struct RoundTracker {
    pub score: u32,
    /// Highest score seen in this page session. Survives `reset`.
    pub best_score: u32,
    pub round: u32,
    pub strikes: u32,
    pub ammo: u32,
    pub kills_this_round: u32,
    pub max_concurrent_ducks: u32,
    /// Start of the current round's clock (ms).
    pub round_start_ms: f64,
}

impl RoundTracker {
    pub fn new(now_ms: f64) -> Self {
        Self {
            score: 0,
            best_score: 0,
            round: 1,
            strikes: 0,
            ammo: MAX_AMMO,
            kills_this_round: 0,
            max_concurrent_ducks: INITIAL_MAX_DUCKS,
            round_start_ms: now_ms,
        }
    }

    /// Full reset for a new game.
    pub fn reset(&mut self, now_ms: f64) {
        let best_score = self.best_score;
        *self = Self {
            best_score,
            ..Self::new(now_ms)
        };
    }

    /// Credit a hit at the current round.
    pub fn register_hit(&mut self, now_ms: f64) -> HitOutcome {
        let points = hit_reward(self.round);
        self.score = self.score.saturating_add(points);
        self.best_score = self.best_score.max(self.score);
        self.kills_this_round += 1;

        let leveled_up = self.kills_this_round >= KILLS_PER_LEVEL;
        if leveled_up {
            self.level_up(now_ms);
        }
        HitOutcome { points, leveled_up }
    }

    /// Count an escaped duck. Returns true on the strike that ends the game.
    pub fn register_escape(&mut self) -> bool {
        if self.strikes >= MAX_STRIKES {
            return false;
        }
        self.strikes += 1;
        self.strikes == MAX_STRIKES
    }

    #[cfg(test)]
    pub fn is_game_over(&self) -> bool {
        self.strikes >= MAX_STRIKES
    }

    /// Advance to the next round. Every second round allows one more duck.
    pub fn level_up(&mut self, now_ms: f64) {
        self.round += 1;
        self.kills_this_round = 0;
        self.round_start_ms = now_ms;
        if self.round % 2 == 0 && self.max_concurrent_ducks < MAX_CONCURRENT_DUCKS_CAP {
            self.max_concurrent_ducks += 1;
        }
    }

    /// Spend one shell. Returns false (and changes nothing) when empty.
    pub fn fire(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn refill_ammo(&mut self) {
        self.ammo = MAX_AMMO;
    }

    pub fn remaining_secs(&self, now_ms: f64) -> f64 {
        ROUND_DURATION_SECS - (now_ms - self.round_start_ms) / 1000.0
    }

    /// Timer-driven level-up. Returns true if the round clock ran out.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.remaining_secs(now_ms) <= 0.0 {
            self.level_up(now_ms);
            return true;
        }
        false
    }

    /// Move the round clock forward, used to skip time spent paused.
    pub fn shift_clock(&mut self, by_ms: f64) {
        self.round_start_ms += by_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hit_worth_600() {
        let mut tracker = RoundTracker::new(0.0);
        let outcome = tracker.register_hit(10.0);
        assert_eq!(outcome.points, 600);
        assert!(!outcome.leveled_up);
        assert_eq!(tracker.score, 600);
        assert_eq!(tracker.kills_this_round, 1);
    }

    #[test]
    fn test_five_hits_level_up_once() {
        let mut tracker = RoundTracker::new(0.0);
        let outcomes: Vec<_> = (0..5).map(|i| tracker.register_hit(i as f64)).collect();
        assert_eq!(outcomes.iter().filter(|o| o.leveled_up).count(), 1);
        assert!(outcomes[4].leveled_up);
        assert_eq!(tracker.round, 2);
        assert_eq!(tracker.kills_this_round, 0);
        assert_eq!(tracker.round_start_ms, 4.0);
    }

    #[test]
    fn test_max_ducks_grows_on_even_rounds_up_to_cap() {
        let mut tracker = RoundTracker::new(0.0);
        let mut seen = Vec::new();
        for _ in 0..10 {
            let before = tracker.max_concurrent_ducks;
            tracker.level_up(0.0);
            let grew = tracker.max_concurrent_ducks - before;
            if tracker.round % 2 == 1 || before == MAX_CONCURRENT_DUCKS_CAP {
                assert_eq!(grew, 0, "round {}", tracker.round);
            } else {
                assert_eq!(grew, 1, "round {}", tracker.round);
            }
            seen.push(tracker.max_concurrent_ducks);
        }
        assert_eq!(seen, vec![2, 2, 3, 3, 4, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_three_strikes_end_game_exactly_once() {
        let mut tracker = RoundTracker::new(0.0);
        assert!(!tracker.register_escape());
        assert!(!tracker.register_escape());
        assert!(!tracker.is_game_over());
        assert!(tracker.register_escape());
        assert!(tracker.is_game_over());
        assert!(!tracker.register_escape());
        assert_eq!(tracker.strikes, MAX_STRIKES);
    }

    #[test]
    fn test_fire_never_underflows() {
        let mut tracker = RoundTracker::new(0.0);
        assert!(tracker.fire());
        assert!(tracker.fire());
        assert!(tracker.fire());
        assert_eq!(tracker.ammo, 0);
        assert!(!tracker.fire());
        assert_eq!(tracker.ammo, 0);
        tracker.refill_ammo();
        assert_eq!(tracker.ammo, MAX_AMMO);
    }

    #[test]
    fn test_round_clock_levels_up() {
        let mut tracker = RoundTracker::new(1000.0);
        assert!(!tracker.tick(60_999.0));
        assert!((tracker.remaining_secs(31_000.0) - 30.0).abs() < 1e-9);
        assert!(tracker.tick(61_000.0));
        assert_eq!(tracker.round, 2);
        assert_eq!(tracker.round_start_ms, 61_000.0);
        assert!(!tracker.tick(61_016.0));
    }

    #[test]
    fn test_reset_keeps_best_score() {
        let mut tracker = RoundTracker::new(0.0);
        tracker.register_hit(0.0);
        tracker.register_escape();
        tracker.fire();
        tracker.reset(500.0);
        assert_eq!(tracker.score, 0);
        assert_eq!(tracker.strikes, 0);
        assert_eq!(tracker.ammo, MAX_AMMO);
        assert_eq!(tracker.round, 1);
        assert_eq!(tracker.best_score, 600);
        assert_eq!(tracker.round_start_ms, 500.0);
    }
}

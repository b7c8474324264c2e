//! Delayed actions owned by the engine and checked every tick.
//!
//! Entries are cleared on reset, and each action re-validates game state
//! when it fires, so nothing scheduled before a restart can leak into it.

/// Something the engine does later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    /// Refill an empty magazine.
    Reload,
    /// Hide the level-up banner shown for `round`.
    HideBanner { round: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTimer {
    pub due_ms: f64,
    pub action: TimedAction,
}

/// Pending timers in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct PendingTimers {
    entries: Vec<PendingTimer>,
}

impl PendingTimers {
    pub fn schedule(&mut self, due_ms: f64, action: TimedAction) {
        self.entries.push(PendingTimer { due_ms, action });
    }

    /// Remove and return every action due at `now_ms`, in scheduling order.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<TimedAction> {
        let mut due = Vec::new();
        self.entries.retain(|timer| {
            if timer.due_ms <= now_ms {
                due.push(timer.action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_scheduled(&self, action: TimedAction) -> bool {
        self.entries.iter().any(|t| t.action == action)
    }

    /// Push every deadline back, used to skip time spent paused.
    pub fn shift(&mut self, by_ms: f64) {
        for timer in &mut self.entries {
            timer.due_ms += by_ms;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

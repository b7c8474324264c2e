//! Duck behavior finite state machine.
//!
//! Pure functions that compute status transitions and motion for one duck
//! based on its status, position and age. No ECS dependency; operates on
//! plain data. Randomness (new waypoints) is left to the caller.

use duckhunt_core::components::WingAnimation;
use duckhunt_core::constants::*;
use duckhunt_core::enums::{DuckPhase, DuckStatus, Facing};
use duckhunt_core::types::{Position, Viewport};

/// Input to the duck FSM for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct DuckContext {
    pub status: DuckStatus,
    pub position: Position,
    pub waypoint: Position,
    pub speed: f32,
    /// Time since spawn (ms).
    pub elapsed_ms: f64,
    /// Allotted time aloft (ms).
    pub lifetime_ms: f64,
    pub viewport: Viewport,
}

/// Output from the duck FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuckUpdate {
    pub new_status: DuckStatus,
    pub new_position: Position,
    pub status_changed: bool,
    /// The duck is within ARRIVAL_EPSILON of its waypoint and needs a new one.
    pub reached_waypoint: bool,
    /// The duck ran out of time this tick. Counts as a strike.
    pub escaped: bool,
    /// The duck has left the screen and must be removed.
    pub offscreen: bool,
}

impl DuckUpdate {
    fn unchanged(ctx: &DuckContext) -> Self {
        Self {
            new_status: ctx.status,
            new_position: ctx.position,
            status_changed: false,
            reached_waypoint: false,
            escaped: false,
            offscreen: false,
        }
    }
}

/// Evaluate the FSM for one duck and one tick.
pub fn evaluate(ctx: &DuckContext) -> DuckUpdate {
    match ctx.status {
        DuckStatus::Flying => evaluate_flying(ctx),
        DuckStatus::Hit {
            ticks,
            fall_velocity,
        } => evaluate_hit(ctx, ticks, fall_velocity),
        DuckStatus::Falling { fall_velocity } => evaluate_falling(ctx, fall_velocity),
        DuckStatus::Fleeing => evaluate_fleeing(ctx),
    }
}

/// The status a flying duck takes when a shot connects.
pub fn struck() -> DuckStatus {
    DuckStatus::Hit {
        ticks: 0,
        fall_velocity: 0.0,
    }
}

fn evaluate_flying(ctx: &DuckContext) -> DuckUpdate {
    if ctx.elapsed_ms >= ctx.lifetime_ms {
        return DuckUpdate {
            new_status: DuckStatus::Fleeing,
            status_changed: true,
            escaped: true,
            ..DuckUpdate::unchanged(ctx)
        };
    }

    let rate = (ctx.speed * FLIGHT_RATE_PER_SPEED).clamp(0.0, 1.0);
    let pos = ctx.position.to_vec2();
    let target = ctx.waypoint.to_vec2();
    let next = pos + (target - pos) * rate;

    DuckUpdate {
        new_position: next.into(),
        reached_waypoint: next.distance(target) < ARRIVAL_EPSILON,
        ..DuckUpdate::unchanged(ctx)
    }
}

fn evaluate_hit(ctx: &DuckContext, ticks: u32, fall_velocity: f32) -> DuckUpdate {
    let ticks = ticks + 1;
    if ticks >= HIT_PAUSE_TICKS {
        return DuckUpdate {
            new_status: DuckStatus::Falling { fall_velocity },
            status_changed: true,
            ..DuckUpdate::unchanged(ctx)
        };
    }

    DuckUpdate {
        new_status: DuckStatus::Hit {
            ticks,
            fall_velocity,
        },
        ..DuckUpdate::unchanged(ctx)
    }
}

fn evaluate_falling(ctx: &DuckContext, fall_velocity: f32) -> DuckUpdate {
    let fall_velocity = fall_velocity + FALL_ACCELERATION;
    let new_position = Position::new(ctx.position.x, ctx.position.y + fall_velocity);

    DuckUpdate {
        new_status: DuckStatus::Falling { fall_velocity },
        new_position,
        offscreen: new_position.y - DUCK_DRAW_SIZE * 0.5 > ctx.viewport.height,
        ..DuckUpdate::unchanged(ctx)
    }
}

fn evaluate_fleeing(ctx: &DuckContext) -> DuckUpdate {
    let new_position = Position::new(ctx.position.x, ctx.position.y - FLEE_SPEED);

    DuckUpdate {
        new_position,
        offscreen: new_position.y + DUCK_DRAW_SIZE * 0.5 < 0.0,
        ..DuckUpdate::unchanged(ctx)
    }
}

/// Advance the wing-flap animation by one tick.
/// Only flying and fleeing ducks flap; hit and falling ducks hold a fixed pose.
pub fn animate(anim: WingAnimation, phase: DuckPhase) -> WingAnimation {
    if !matches!(phase, DuckPhase::Flying | DuckPhase::Fleeing) {
        return anim;
    }

    let ticks = anim.ticks + 1;
    if ticks >= FLAP_INTERVAL_TICKS {
        WingAnimation {
            frame: (anim.frame + 1) % FLAP_FRAME_COUNT,
            ticks: 0,
            ..anim
        }
    } else {
        WingAnimation { ticks, ..anim }
    }
}

/// Sprite direction for a duck travelling from `from` toward `to`.
/// Purely vertical travel keeps the current facing.
pub fn facing_toward(from: &Position, to: &Position, current: Facing) -> Facing {
    if to.x > from.x {
        Facing::Right
    } else if to.x < from.x {
        Facing::Left
    } else {
        current
    }
}

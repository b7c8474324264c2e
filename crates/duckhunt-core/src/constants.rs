//! Game constants and tuning parameters.
//!
//! Duck motion is tuned per frame, assuming the page refreshes at ~60 Hz.

/// Nominal display refresh rate the per-tick constants are tuned for.
pub const NOMINAL_FRAME_RATE: u32 = 60;

// --- Viewport ---

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

// --- Round / progression ---

/// Length of one round's clock in seconds.
pub const ROUND_DURATION_SECS: f64 = 60.0;

/// Kills within a round that trigger a level-up.
pub const KILLS_PER_LEVEL: u32 = 5;

/// Strikes (escaped ducks) that end the game.
pub const MAX_STRIKES: u32 = 3;

/// Shells in a full magazine.
pub const MAX_AMMO: u32 = 3;

/// Delay before an empty magazine refills when the last shot missed.
pub const RELOAD_DELAY_MS: f64 = 1000.0;

/// Points for any hit, before the round bonus.
pub const BASE_REWARD: u32 = 500;

/// Extra points per hit for each round number.
pub const ROUND_BONUS: u32 = 100;

/// Concurrent ducks at round 1.
pub const INITIAL_MAX_DUCKS: u32 = 1;

/// Upper bound on concurrent ducks.
pub const MAX_CONCURRENT_DUCKS_CAP: u32 = 4;

/// How long the level-up banner stays on screen.
pub const BANNER_DURATION_MS: f64 = 2000.0;

// --- Duck lifetime & speed ---

/// Lifetime before a duck flees, at round 0.
pub const DUCK_BASE_LIFETIME_MS: f64 = 10_000.0;

/// Lifetime lost per round.
pub const DUCK_LIFETIME_STEP_MS: f64 = 800.0;

/// Lifetime floor regardless of round.
pub const DUCK_MIN_LIFETIME_MS: f64 = 4000.0;

/// Duck speed at round 0.
pub const DUCK_BASE_SPEED: f32 = 2.0;

/// Speed gained per round.
pub const DUCK_SPEED_PER_ROUND: f32 = 0.5;

/// Fraction of the remaining waypoint distance covered per tick per unit speed.
pub const FLIGHT_RATE_PER_SPEED: f32 = 0.008;

/// Distance (pixels) at which a duck has reached its waypoint.
pub const ARRIVAL_EPSILON: f32 = 12.0;

/// Waypoints are picked within this top fraction of the screen height.
pub const WAYPOINT_HEIGHT_FRACTION: f32 = 0.5;

// --- Duck state timing ---

/// Ticks between wing-flap animation frames.
pub const FLAP_INTERVAL_TICKS: u32 = 6;

/// Number of wing-flap frames.
pub const FLAP_FRAME_COUNT: u8 = 3;

/// Ticks a hit duck stays frozen before it starts falling.
pub const HIT_PAUSE_TICKS: u32 = 30;

/// Downward acceleration of a falling duck (pixels per tick squared).
pub const FALL_ACCELERATION: f32 = 0.5;

/// Upward speed of a fleeing duck (pixels per tick).
pub const FLEE_SPEED: f32 = 6.0;

// --- Hit testing ---

/// Hit radius as a fraction of viewport width.
pub const HIT_RADIUS_FRACTION: f32 = 0.06;

// --- Sprites ---

/// Edge length of one duck cell on screen (pixels).
pub const DUCK_DRAW_SIZE: f32 = 96.0;

/// Edge length of one duck cell in the source sprite sheet (pixels).
pub const SPRITE_CELL_SIZE: f32 = 64.0;

/// Sprite sheet column for the hit pose.
pub const SPRITE_HIT_COLUMN: u32 = 3;

/// Sprite sheet column for the falling pose.
pub const SPRITE_FALL_COLUMN: u32 = 4;

// --- HUD ---

/// Digits the score is zero-padded to.
pub const SCORE_DIGITS: usize = 6;

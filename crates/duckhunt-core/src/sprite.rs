//! Sprite sheet layout: which cell of the duck sheet to draw.
//!
//! Columns 0..FLAP_FRAME_COUNT hold the wing-flap cycle, followed by the hit
//! pose and the falling pose. Row 0 faces right, row 1 faces left.

use serde::{Deserialize, Serialize};

use crate::constants::{FLAP_FRAME_COUNT, SPRITE_CELL_SIZE, SPRITE_FALL_COLUMN, SPRITE_HIT_COLUMN};
use crate::enums::{DuckPhase, Facing};

/// Source rectangle in sprite-sheet pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

pub fn sprite_column(phase: DuckPhase, frame: u8) -> u32 {
    match phase {
        DuckPhase::Flying | DuckPhase::Fleeing => (frame % FLAP_FRAME_COUNT) as u32,
        DuckPhase::Hit => SPRITE_HIT_COLUMN,
        DuckPhase::Falling => SPRITE_FALL_COLUMN,
    }
}

pub fn sprite_row(facing: Facing) -> u32 {
    match facing {
        Facing::Right => 0,
        Facing::Left => 1,
    }
}

/// Source rectangle for a duck in the given phase, frame and facing.
pub fn sprite_rect(phase: DuckPhase, frame: u8, facing: Facing) -> SpriteRect {
    SpriteRect {
        x: sprite_column(phase, frame) as f32 * SPRITE_CELL_SIZE,
        y: sprite_row(facing) as f32 * SPRITE_CELL_SIZE,
        w: SPRITE_CELL_SIZE,
        h: SPRITE_CELL_SIZE,
    }
}

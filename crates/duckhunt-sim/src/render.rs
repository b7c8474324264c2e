//! Draw-list builder. Turns a snapshot into the ordered drawing operations
//! the canvas backend executes. Pure function of the snapshot.

use serde::{Deserialize, Serialize};

use duckhunt_core::constants::DUCK_DRAW_SIZE;
use duckhunt_core::sprite::SpriteRect;
use duckhunt_core::state::GameStateSnapshot;
use duckhunt_core::types::Position;

/// Crosshair ring radius in screen pixels.
pub const CROSSHAIR_RADIUS: f32 = 18.0;

/// One drawing operation, in painter's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Stretch the background image over the whole surface.
    Background { width: f32, height: f32 },
    /// Copy `src` from the duck sheet into a square at `dest` (top-left corner).
    Sprite {
        src: SpriteRect,
        dest: Position,
        size: f32,
    },
    Crosshair {
        at: Position,
        radius: f32,
        /// Drawn filled while the hand is pinching.
        armed: bool,
    },
}

/// Background first, then ducks in id order, then the crosshair if a hand
/// is visible.
pub fn build_draw_list(snapshot: &GameStateSnapshot) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.ducks.len() + 2);
    commands.push(DrawCommand::Background {
        width: snapshot.viewport.width,
        height: snapshot.viewport.height,
    });

    let half = DUCK_DRAW_SIZE * 0.5;
    commands.extend(snapshot.ducks.iter().map(|duck| DrawCommand::Sprite {
        src: duck.sprite,
        dest: Position::new(duck.position.x - half, duck.position.y - half),
        size: DUCK_DRAW_SIZE,
    }));

    if snapshot.crosshair.hand_visible {
        commands.push(DrawCommand::Crosshair {
            at: snapshot.crosshair.position,
            radius: CROSSHAIR_RADIUS,
            armed: snapshot.crosshair.pinching,
        });
    }
    commands
}

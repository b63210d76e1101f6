//! Movement domain: per-frame input snapshot.

use bevy::prelude::*;

/// Input read once per frame and handed to the logic tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// x: -1..1 horizontal, y: -1..1 vertical.
    pub axis: Vec2,
    /// Jump went down this frame.
    pub jump_pressed: bool,
    /// Jump came up this frame.
    pub jump_released: bool,
}

impl MovementInput {
    pub fn down_held(&self) -> bool {
        self.axis.y < 0.0
    }
}

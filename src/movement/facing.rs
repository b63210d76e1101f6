//! Movement domain: facing direction and visual mirroring.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    /// +1 facing right, -1 facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Turn toward the requested direction. Returns `true` if facing changed.
///
/// Only call this for non-zero horizontal input; releasing the stick keeps
/// the last facing.
pub fn set_facing(facing: &mut Facing, moving_right: bool) -> bool {
    if moving_right == facing.is_right() {
        return false;
    }
    *facing = facing.flipped();
    true
}

/// Mirror a visual on the horizontal axis.
pub fn mirror_horizontal(scale: &mut Vec3) {
    scale.x *= -1.0;
}

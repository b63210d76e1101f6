//! Movement domain: ground and wall contact probes.
//!
//! Three fixed-size boxes hang off the player's collider: one under the
//! feet, one on the side the player faces (front) and one behind (back).
//! Which physical side counts as the "left" or "right" wall depends on
//! facing, not on which probe hit.

use bevy::prelude::*;

use crate::config::{MovementConfig, ProbeGeometry};
use crate::movement::facing::Facing;
use crate::movement::timers::TimerBank;

/// Raw overlap results for one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactSample {
    pub on_ground: bool,
    /// Probe on the side the player faces.
    pub front_wall: bool,
    /// Probe on the side behind the player.
    pub back_wall: bool,
}

/// Source of contact samples. The ECS side implements this with a spatial
/// query; a bare `ContactSample` replays a fixed result.
pub trait ContactSampler {
    fn sample(&self, facing: Facing) -> ContactSample;
}

impl ContactSampler for ContactSample {
    fn sample(&self, _facing: Facing) -> ContactSample {
        *self
    }
}

/// Wall contact resolved to world sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallSides {
    pub left: bool,
    pub right: bool,
}

impl WallSides {
    pub fn resolve(sample: ContactSample, facing: Facing) -> Self {
        let facing_right = facing.is_right();
        Self {
            right: (sample.front_wall && facing_right) || (sample.back_wall && !facing_right),
            left: (sample.front_wall && !facing_right) || (sample.back_wall && facing_right),
        }
    }
}

/// An axis-aligned overlap box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBox {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBoxes {
    pub ground: ProbeBox,
    pub front: ProbeBox,
    pub back: ProbeBox,
}

impl ProbeBoxes {
    /// Place the probes around a collider centred at `origin`.
    pub fn around(
        origin: Vec2,
        half_extents: Vec2,
        facing: Facing,
        geometry: &ProbeGeometry,
    ) -> Self {
        let forward = Vec2::new(half_extents.x * facing.sign(), 0.0);
        let wall_size = geometry.wall_check.as_vec2();
        Self {
            ground: ProbeBox {
                center: origin - Vec2::new(0.0, half_extents.y),
                size: geometry.ground_check.as_vec2(),
            },
            front: ProbeBox {
                center: origin + forward,
                size: wall_size,
            },
            back: ProbeBox {
                center: origin - forward,
                size: wall_size,
            },
        }
    }
}

/// Refresh coyote timers from a positive sample.
pub fn refresh_timers(
    sample: ContactSample,
    facing: Facing,
    timers: &mut TimerBank,
    config: &MovementConfig,
) {
    if sample.on_ground {
        timers.refresh_ground(config);
    }

    let walls = WallSides::resolve(sample, facing);
    if walls.right {
        timers.refresh_wall_right(config);
    }
    if walls.left {
        timers.refresh_wall_left(config);
    }
}

//! Config domain: movement tuning constants.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// World gravity magnitude in pixels per second squared.
/// `gravity_scale` multiplies this value.
pub const WORLD_GRAVITY: f32 = 980.0;

/// Size of an axis-aligned probe box.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

impl BoxSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Geometry of the three contact probes, relative to the player's collider.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ProbeGeometry {
    /// Box centred under the feet.
    pub ground_check: BoxSize,
    /// Box centred on each side (front and back).
    pub wall_check: BoxSize,
}

impl Default for ProbeGeometry {
    fn default() -> Self {
        Self {
            ground_check: BoxSize::new(23.5, 2.0),
            wall_check: BoxSize::new(4.0, 40.0),
        }
    }
}

/// Designer-facing jump description. When present in a config file it
/// overrides `gravity_scale` and `jump_force`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct JumpProfile {
    /// Apex height of a full ground jump, in pixels.
    pub jump_height: f32,
    /// Seconds from take-off to apex.
    pub time_to_apex: f32,
}

impl Default for JumpProfile {
    fn default() -> Self {
        Self {
            jump_height: 112.0,
            time_to_apex: 0.3,
        }
    }
}

impl JumpProfile {
    /// Gravity acceleration (magnitude) needed to reach `jump_height` in `time_to_apex`.
    pub fn gravity_strength(&self) -> f32 {
        2.0 * self.jump_height / (self.time_to_apex * self.time_to_apex)
    }

    /// Take-off velocity for this profile.
    pub fn jump_force(&self) -> f32 {
        self.gravity_strength() * self.time_to_apex
    }
}

/// Tunable movement constants. Loaded once, never mutated by the controller.
///
/// Speeds are in pixels per second, times in seconds, `*_amount` rates in
/// 1/s (fraction of the remaining speed difference closed per second).
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementConfig {
    // Gravity
    pub gravity_scale: f32,
    pub fall_gravity_mult: f32,
    pub max_fall_speed: f32,
    pub fast_fall_gravity_mult: f32,
    pub max_fast_fall_speed: f32,

    // Run
    pub move_max_speed: f32,
    pub move_accel_amount: f32,
    pub move_deccel_amount: f32,
    pub accel_in_air: f32,
    pub deccel_in_air: f32,
    pub do_conserve_momentum: bool,

    // Jump
    pub jump_force: f32,
    pub jump_cut_gravity_mult: f32,
    pub jump_hang_gravity_mult: f32,
    pub jump_hang_time_threshold: f32,

    // Wall jump
    /// Horizontal push of a wall jump, away from the wall.
    pub wall_jump_force: f32,
    /// Run lerp while wall-jumping; lower keeps the push from being overridden.
    pub wall_jump_run_lerp: f32,
    pub wall_jump_time: f32,

    // Slide
    /// Downward speed the slide settles toward.
    pub slide_speed: f32,
    pub slide_accel: f32,

    // Assists
    pub coyote_time: f32,
    pub jump_input_buffer_time: f32,

    pub probes: ProbeGeometry,
    pub jump_profile: Option<JumpProfile>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        // gravity_scale and jump_force match JumpProfile::default() at WORLD_GRAVITY
        Self {
            gravity_scale: 2.539_682,
            fall_gravity_mult: 1.5,
            max_fall_speed: 800.0,
            fast_fall_gravity_mult: 2.0,
            max_fast_fall_speed: 960.0,

            move_max_speed: 352.0,
            move_accel_amount: 11.36,
            move_deccel_amount: 22.72,
            accel_in_air: 0.65,
            deccel_in_air: 0.65,
            do_conserve_momentum: true,

            jump_force: 746.666_7,
            jump_cut_gravity_mult: 2.0,
            jump_hang_gravity_mult: 0.5,
            jump_hang_time_threshold: 32.0,

            wall_jump_force: 480.0,
            wall_jump_run_lerp: 0.5,
            wall_jump_time: 0.15,

            slide_speed: 96.0,
            slide_accel: 40.0,

            coyote_time: 0.1,
            jump_input_buffer_time: 0.1,

            probes: ProbeGeometry::default(),
            jump_profile: None,
        }
    }
}

impl MovementConfig {
    /// Overwrite `gravity_scale` and `jump_force` from `jump_profile`, if one is set.
    pub fn apply_jump_profile(&mut self, world_gravity: f32) {
        if let Some(profile) = self.jump_profile {
            self.gravity_scale = profile.gravity_strength() / world_gravity;
            self.jump_force = profile.jump_force();
        }
    }

    /// Apex height of a ground jump from rest under base gravity: h = v² / (2g).
    pub fn jump_height(&self, world_gravity: f32) -> f32 {
        let gravity = self.gravity_scale * world_gravity;
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * gravity)
    }
}

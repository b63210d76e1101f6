//! Movement domain: grace-window countdowns.

use bevy::prelude::*;

use crate::config::MovementConfig;

/// Timers never decay below this, so an idle character does not drift
/// toward the edge of f32 precision.
pub const TIMER_FLOOR: f32 = -10.0;

/// Countdown timers, in seconds. A timer is active while `> 0`.
///
/// Every timer decays unconditionally once per logic tick; contact and
/// jump-press events reset them to their configured duration.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerBank {
    pub ground: f32,
    pub wall_left: f32,
    pub wall_right: f32,
    pub jump_buffer: f32,
}

impl TimerBank {
    pub fn decay(&mut self, dt: f32) {
        for timer in [
            &mut self.ground,
            &mut self.wall_left,
            &mut self.wall_right,
            &mut self.jump_buffer,
        ] {
            *timer = (*timer - dt).max(TIMER_FLOOR);
        }
    }

    pub fn refresh_ground(&mut self, config: &MovementConfig) {
        self.ground = config.coyote_time;
    }

    pub fn refresh_wall_left(&mut self, config: &MovementConfig) {
        self.wall_left = config.coyote_time;
    }

    pub fn refresh_wall_right(&mut self, config: &MovementConfig) {
        self.wall_right = config.coyote_time;
    }

    pub fn buffer_jump_press(&mut self, config: &MovementConfig) {
        self.jump_buffer = config.jump_input_buffer_time;
    }

    /// Zero the buffer so one press fires at most one jump.
    pub fn consume_jump_buffer(&mut self) {
        self.jump_buffer = 0.0;
    }

    /// Most recent wall contact on either side.
    pub fn wall(&self) -> f32 {
        self.wall_left.max(self.wall_right)
    }

    pub fn ground_active(&self) -> bool {
        self.ground > 0.0
    }

    pub fn wall_active(&self) -> bool {
        self.wall() > 0.0
    }

    pub fn wall_left_active(&self) -> bool {
        self.wall_left > 0.0
    }

    pub fn wall_right_active(&self) -> bool {
        self.wall_right > 0.0
    }

    pub fn jump_buffered(&self) -> bool {
        self.jump_buffer > 0.0
    }
}

//! Movement domain: phase-dependent gravity scale and fall-speed caps.

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::state::MotionState;

/// The gravity branch selected for a tick, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityRule {
    /// Wall friction replaces gravity.
    Slide,
    FastFall,
    JumpCut,
    /// Near the apex of a jump.
    Hang,
    Fall,
    Base,
}

impl GravityRule {
    /// First matching rule wins.
    pub fn select(
        state: &MotionState,
        vertical_velocity: f32,
        down_held: bool,
        config: &MovementConfig,
    ) -> Self {
        let in_jump = state.is_jumping() || state.is_wall_jumping() || state.is_jump_falling();

        if state.sliding {
            GravityRule::Slide
        } else if vertical_velocity < 0.0 && down_held {
            GravityRule::FastFall
        } else if state.jump_cut {
            GravityRule::JumpCut
        } else if in_jump && vertical_velocity.abs() < config.jump_hang_time_threshold {
            GravityRule::Hang
        } else if vertical_velocity < 0.0 {
            GravityRule::Fall
        } else {
            GravityRule::Base
        }
    }

    pub fn gravity_scale(self, config: &MovementConfig) -> f32 {
        match self {
            GravityRule::Slide => 0.0,
            GravityRule::FastFall => config.gravity_scale * config.fast_fall_gravity_mult,
            GravityRule::JumpCut => config.gravity_scale * config.jump_cut_gravity_mult,
            GravityRule::Hang => config.gravity_scale * config.jump_hang_gravity_mult,
            GravityRule::Fall => config.gravity_scale * config.fall_gravity_mult,
            GravityRule::Base => config.gravity_scale,
        }
    }

    /// Terminal downward speed enforced by this rule, if any.
    pub fn fall_cap(self, config: &MovementConfig) -> Option<f32> {
        match self {
            GravityRule::FastFall => Some(config.max_fast_fall_speed),
            GravityRule::JumpCut | GravityRule::Fall => Some(config.max_fall_speed),
            GravityRule::Slide | GravityRule::Hang | GravityRule::Base => None,
        }
    }
}

/// Select the gravity rule, write its scale and clamp the fall speed.
/// Returns the new gravity scale alongside the rule.
pub fn modulate_gravity(
    state: &MotionState,
    velocity: &mut Vec2,
    down_held: bool,
    config: &MovementConfig,
) -> (GravityRule, f32) {
    let rule = GravityRule::select(state, velocity.y, down_held, config);
    if let Some(cap) = rule.fall_cap(config) {
        velocity.y = velocity.y.max(-cap);
    }
    (rule, rule.gravity_scale(config))
}

//! Movement domain: run acceleration and wall-slide damping.
//!
//! Both run on the fixed physics step.

use bevy::prelude::*;

use crate::config::MovementConfig;

/// Below this a target speed counts as "stop".
const TARGET_EPSILON: f32 = 0.01;

/// Target horizontal speed, eased from the current velocity by `lerp`.
/// `lerp = 1` commits fully to the input.
pub fn target_speed(input_x: f32, current_vx: f32, lerp: f32, config: &MovementConfig) -> f32 {
    let full = input_x * config.move_max_speed;
    current_vx + (full - current_vx) * lerp
}

/// Acceleration rate toward `target`, in 1/s.
///
/// With momentum conservation enabled, an airborne character already moving
/// faster than a same-direction target keeps its speed instead of being
/// braked down to it.
pub fn accel_rate(target: f32, current_vx: f32, grounded: bool, config: &MovementConfig) -> f32 {
    let accelerating = target.abs() > TARGET_EPSILON;

    let rate = match (grounded, accelerating) {
        (true, true) => config.move_accel_amount,
        (true, false) => config.move_deccel_amount,
        (false, true) => config.move_accel_amount * config.accel_in_air,
        (false, false) => config.move_deccel_amount * config.deccel_in_air,
    };

    let coasting = config.do_conserve_momentum
        && !grounded
        && accelerating
        && current_vx.abs() > target.abs()
        && current_vx.signum() == target.signum();

    if coasting { 0.0 } else { rate }
}

/// Move `velocity.x` toward the input-driven target for one physics step.
pub fn apply_run(
    velocity: &mut Vec2,
    input_x: f32,
    grounded: bool,
    lerp: f32,
    config: &MovementConfig,
    dt: f32,
) {
    let target = target_speed(input_x, velocity.x, lerp, config);
    let rate = accel_rate(target, velocity.x, grounded, config);
    velocity.x += (target - velocity.x) * (rate * dt).min(1.0);
}

/// Ease the vertical velocity toward the slide speed for one physics step.
pub fn apply_slide(velocity: &mut Vec2, config: &MovementConfig, dt: f32) {
    let target = -config.slide_speed;
    velocity.y += (target - velocity.y) * (config.slide_accel * dt).min(1.0);
}

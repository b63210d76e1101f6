//! Movement domain: the logic tick and physics tick.
//!
//! These functions hold the ordering guarantees and are independent of the
//! ECS; the systems in `systems::movement` only copy rigid-body state in
//! and out.

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::facing::set_facing;
use crate::movement::gravity::{GravityRule, modulate_gravity};
use crate::movement::horizontal::{apply_run, apply_slide};
use crate::movement::probe::{ContactSample, ContactSampler, refresh_timers};
use crate::movement::resources::MovementInput;
use crate::movement::state::{JumpKind, MotionState};
use crate::movement::timers::TimerBank;

/// The rigid-body values the controller reads and writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

impl Kinematics {
    pub fn new(velocity: Vec2, gravity_scale: f32) -> Self {
        Self {
            velocity,
            gravity_scale,
        }
    }
}

/// Time for one logic tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    /// Seconds since startup.
    pub now: f32,
    /// Seconds since the previous logic tick.
    pub dt: f32,
}

/// What happened during a logic tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Facing flipped; the visual must be mirrored.
    pub turned: bool,
    /// `None` when probing was skipped mid-jump.
    pub contacts: Option<ContactSample>,
    pub jump: Option<JumpKind>,
    pub gravity: GravityRule,
}

/// One logic tick, run once per rendered frame.
///
/// Order: timer decay, jump-press buffering, facing, contact refresh, state
/// resolution, gravity.
pub fn logic_tick(
    state: &mut MotionState,
    timers: &mut TimerBank,
    kinematics: &mut Kinematics,
    input: &MovementInput,
    probe: &impl ContactSampler,
    config: &MovementConfig,
    clock: Clock,
) -> TickOutcome {
    timers.decay(clock.dt);

    if input.jump_pressed {
        timers.buffer_jump_press(config);
    }

    let turned = input.axis.x != 0.0 && set_facing(&mut state.facing, input.axis.x > 0.0);

    let contacts = state.accepts_contacts().then(|| {
        let sample = probe.sample(state.facing);
        refresh_timers(sample, state.facing, timers, config);
        sample
    });

    let jump = state.resolve(timers, &mut kinematics.velocity, input, config, clock.now);

    let (gravity, gravity_scale) =
        modulate_gravity(state, &mut kinematics.velocity, input.down_held(), config);
    kinematics.gravity_scale = gravity_scale;

    TickOutcome {
        turned,
        contacts,
        jump,
        gravity,
    }
}

/// One fixed physics step: run acceleration, then slide damping.
pub fn physics_tick(
    state: &MotionState,
    timers: &TimerBank,
    velocity: &mut Vec2,
    input: &MovementInput,
    config: &MovementConfig,
    dt: f32,
) {
    let lerp = if state.is_wall_jumping() {
        config.wall_jump_run_lerp
    } else {
        1.0
    };
    apply_run(velocity, input.axis.x, timers.ground_active(), lerp, config, dt);

    if state.sliding {
        apply_slide(velocity, config, dt);
    }
}

//! Movement domain: player locomotion plugin wiring and public exports.
//!
//! The decision logic (timers, probes, state machine, gravity, run
//! acceleration) is plain Rust in the leaf modules and is driven by
//! [`logic_tick`] once per frame and [`physics_tick`] once per fixed step.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod facing;
mod gravity;
mod horizontal;
mod probe;
mod resources;
mod state;
mod systems;
mod timers;


pub use components::{
    FALLBACK_HALF_EXTENTS, GameLayer, LastContacts, PLAYER_HALF_EXTENTS, Player, PlayerVisual,
};
pub use controller::{Clock, Kinematics, TickOutcome, logic_tick, physics_tick};
pub use facing::{Facing, mirror_horizontal, set_facing};
pub use gravity::{GravityRule, modulate_gravity};
pub use horizontal::{accel_rate, apply_run, apply_slide, target_speed};
pub use probe::{ContactSample, ContactSampler, ProbeBox, ProbeBoxes, WallSides, refresh_timers};
pub use resources::MovementInput;
pub use state::{JumpKind, JumpPhase, MotionState, PhaseEvent, apply_impulse};
pub use timers::{TIMER_FLOOR, TimerBank};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::{MovementConfig, WORLD_GRAVITY};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{read_input, run_logic_tick, run_physics_tick};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        // ConfigPlugin replaces this with the loaded config during PreStartup
        app.init_resource::<MovementConfig>()
            .init_resource::<MovementInput>()
            .register_type::<MotionState>()
            .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_input, run_logic_tick).chain())
            .add_systems(FixedUpdate, run_physics_tick);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_contact_probes.after(run_logic_tick));
    }
}

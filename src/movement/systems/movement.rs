//! Movement domain: ECS glue for the logic and physics ticks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::controller::{Clock, Kinematics, logic_tick, physics_tick};
use crate::movement::facing::mirror_horizontal;
use crate::movement::systems::collisions::{SpatialContactSampler, collider_half_extents};
use crate::movement::{
    LastContacts, MotionState, MovementInput, Player, PlayerVisual, TimerBank,
};

/// Once per frame: timers, contacts, state transitions, gravity.
#[allow(clippy::type_complexity)]
pub(crate) fn run_logic_tick(
    time: Res<Time>,
    input: Res<MovementInput>,
    config: Res<MovementConfig>,
    spatial_query: SpatialQuery,
    mut players: Query<
        (
            &Transform,
            &Collider,
            &Children,
            &mut MotionState,
            &mut TimerBank,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut LastContacts,
        ),
        With<Player>,
    >,
    mut visuals: Query<&mut Transform, (With<PlayerVisual>, Without<Player>)>,
) {
    let clock = Clock {
        now: time.elapsed_secs(),
        dt: time.delta_secs(),
    };

    for (
        transform,
        collider,
        children,
        mut state,
        mut timers,
        mut velocity,
        mut gravity_scale,
        mut last_contacts,
    ) in &mut players
    {
        let probe = SpatialContactSampler {
            spatial_query: &spatial_query,
            origin: transform.translation.truncate(),
            half_extents: collider_half_extents(collider),
            geometry: &config.probes,
        };

        let mut kinematics = Kinematics::new(velocity.0, gravity_scale.0);
        let outcome = logic_tick(
            &mut state,
            &mut timers,
            &mut kinematics,
            &input,
            &probe,
            &config,
            clock,
        );

        velocity.0 = kinematics.velocity;
        gravity_scale.0 = kinematics.gravity_scale;
        last_contacts.0 = outcome.contacts;

        if outcome.turned {
            for child in &**children {
                if let Ok(mut visual) = visuals.get_mut(*child) {
                    mirror_horizontal(&mut visual.scale);
                }
            }
        }
    }
}

/// Every fixed step: horizontal acceleration and slide damping.
pub(crate) fn run_physics_tick(
    time: Res<Time>,
    input: Res<MovementInput>,
    config: Res<MovementConfig>,
    mut players: Query<(&MotionState, &TimerBank, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, timers, mut velocity) in &mut players {
        physics_tick(state, timers, &mut velocity.0, &input, &config, dt);
    }
}

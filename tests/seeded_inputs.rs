//! Drive the controller with seeded random input and contact streams and
//! check that its invariants hold on every tick.

use bevy::prelude::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use platformer_motion::config::{MovementConfig, WORLD_GRAVITY};
use platformer_motion::movement::{
    Clock, ContactSample, GravityRule, Kinematics, MotionState, MovementInput, TIMER_FLOOR,
    TimerBank, logic_tick, physics_tick,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const FIXED_DT: f32 = 1.0 / 64.0;

#[derive(Debug, PartialEq)]
struct Snapshot {
    state: MotionState,
    timers: TimerBank,
    kinematics: Kinematics,
}

fn random_input(rng: &mut ChaCha8Rng) -> MovementInput {
    let x = match rng.random_range(0..4) {
        0 => -1.0,
        1 => 1.0,
        2 => 0.0,
        _ => rng.random_range(-1.0f32..=1.0),
    };
    let y = if rng.random_bool(0.15) { -1.0 } else { 0.0 };

    MovementInput {
        axis: Vec2::new(x, y),
        jump_pressed: rng.random_bool(0.1),
        jump_released: rng.random_bool(0.1),
    }
}

fn random_contacts(rng: &mut ChaCha8Rng) -> ContactSample {
    ContactSample {
        on_ground: rng.random_bool(0.3),
        front_wall: rng.random_bool(0.2),
        back_wall: rng.random_bool(0.1),
    }
}

/// Run `ticks` frames and assert invariants along the way.
fn run(seed: u64, ticks: usize) -> Snapshot {
    let config = MovementConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut state = MotionState::default();
    let mut timers = TimerBank::default();
    let mut kinematics = Kinematics::new(Vec2::ZERO, config.gravity_scale);
    let mut now = 0.0;
    let mut fixed_accumulator = 0.0;

    for tick in 0..ticks {
        now += FRAME_DT;
        let input = random_input(&mut rng);
        let contacts = random_contacts(&mut rng);
        let buffered_before = timers.jump_buffer - FRAME_DT > 0.0 || input.jump_pressed;

        let outcome = logic_tick(
            &mut state,
            &mut timers,
            &mut kinematics,
            &input,
            &contacts,
            &config,
            Clock { now, dt: FRAME_DT },
        );

        assert!(
            !(state.is_jumping() && state.is_wall_jumping()),
            "tick {}: jumping and wall-jumping at once",
            tick
        );

        if state.sliding {
            assert_eq!(outcome.gravity, GravityRule::Slide, "tick {}", tick);
            assert_eq!(kinematics.gravity_scale, 0.0, "tick {}", tick);
        }

        if let Some(cap) = outcome.gravity.fall_cap(&config) {
            assert!(kinematics.velocity.y >= -cap, "tick {}: fall speed over cap", tick);
        }

        if outcome.jump.is_some() {
            assert!(buffered_before, "tick {}: jump without a buffered press", tick);
            assert_eq!(timers.jump_buffer, 0.0, "tick {}: buffer not consumed", tick);
        }

        for timer in [
            timers.ground,
            timers.wall_left,
            timers.wall_right,
            timers.jump_buffer,
        ] {
            assert!(timer >= TIMER_FLOOR, "tick {}: timer below floor", tick);
        }

        // Stand-in for the rigid body: integrate gravity, then the fixed steps
        kinematics.velocity.y -= kinematics.gravity_scale * WORLD_GRAVITY * FRAME_DT;
        fixed_accumulator += FRAME_DT;
        while fixed_accumulator >= FIXED_DT {
            physics_tick(
                &state,
                &timers,
                &mut kinematics.velocity,
                &input,
                &config,
                FIXED_DT,
            );
            fixed_accumulator -= FIXED_DT;
        }

        assert!(
            kinematics.velocity.is_finite(),
            "tick {}: non-finite velocity {:?}",
            tick,
            kinematics.velocity
        );
    }

    Snapshot {
        state,
        timers,
        kinematics,
    }
}

#[test]
fn test_invariants_hold_under_random_input() {
    for seed in [1, 7, 42, 1234, 98765] {
        run(seed, 3000);
    }
}

#[test]
fn test_same_seed_same_result() {
    assert_eq!(run(12345, 2000), run(12345, 2000));
}

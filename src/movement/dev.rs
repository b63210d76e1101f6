//! Movement domain: debug-only test room and probe overlay.

use avian2d::prelude::*;
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::probe::{ProbeBox, ProbeBoxes};
use crate::movement::systems::collisions::collider_half_extents;
use crate::movement::{GameLayer, LastContacts, MotionState, Player};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let solid_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let pieces = [
        // Floor
        (Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0), ground_color),
        // Outer walls
        (Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0), wall_color),
        (Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0), wall_color),
        // Platforms
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), platform_color),
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), platform_color),
        (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), platform_color),
        // Pillar for wall jumping practice
        (Vec2::new(-100.0, -80.0), Vec2::new(30.0, 200.0), wall_color),
    ];

    for (position, size, color) in pieces {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            solid_layers,
        ));
    }
}

/// Draw the contact probes: green on hit, grey on miss, dim while probing is skipped.
pub(crate) fn draw_contact_probes(
    mut gizmos: Gizmos,
    config: Res<MovementConfig>,
    players: Query<(&Transform, &Collider, &MotionState, &LastContacts), With<Player>>,
) {
    for (transform, collider, state, contacts) in &players {
        let boxes = ProbeBoxes::around(
            transform.translation.truncate(),
            collider_half_extents(collider),
            state.facing,
            &config.probes,
        );

        let hits = contacts
            .0
            .map(|sample| [sample.on_ground, sample.front_wall, sample.back_wall]);

        for (index, probe) in [boxes.ground, boxes.front, boxes.back].into_iter().enumerate() {
            let color = match hits {
                Some(hits) if hits[index] => Color::srgb(0.2, 0.9, 0.3),
                Some(_) => Color::srgb(0.6, 0.6, 0.6),
                None => Color::srgba(0.6, 0.6, 0.6, 0.3),
            };
            draw_probe(&mut gizmos, probe, color);
        }
    }
}

fn draw_probe(gizmos: &mut Gizmos, probe: ProbeBox, color: Color) {
    gizmos.rect_2d(Isometry2d::from_translation(probe.center), probe.size, color);
}

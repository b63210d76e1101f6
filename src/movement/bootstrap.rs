//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::{
    GameLayer, LastContacts, MotionState, PLAYER_HALF_EXTENTS, Player, PlayerVisual, TimerBank,
};

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<MovementConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let size = PLAYER_HALF_EXTENTS * 2.0;

    info!(
        "Spawning player: size={}x{}, max_speed={}, jump_force={}",
        size.x, size.y, config.move_max_speed, config.jump_force
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MotionState::default(),
                TimerBank::default(),
                LastContacts::default(),
            ),
            Transform::from_xyz(0.0, 100.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(config.gravity_scale),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            // Rendering lives on a child so mirroring never touches the collider
            parent.spawn((
                PlayerVisual,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::default(),
            ));
        });
}

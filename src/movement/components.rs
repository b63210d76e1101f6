//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probe::ContactSample;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid level geometry (floors, walls, platforms). Probes test against this.
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Child entity carrying the player's sprite; mirrored on turn.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Last contact sample taken, kept for debugging overlays.
#[derive(Component, Debug, Default)]
pub struct LastContacts(pub Option<ContactSample>);

/// Half extents of the player's box collider and sprite.
pub const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(12.0, 24.0);

/// Collider half extents used when the player shape is not a box.
pub const FALLBACK_HALF_EXTENTS: Vec2 = PLAYER_HALF_EXTENTS;

//! Config domain: movement tuning loaded from disk at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{BoxSize, JumpProfile, MovementConfig, ProbeGeometry, WORLD_GRAVITY};
pub use loader::{
    ConfigFormat, ConfigLoadError, load_movement_config, parse_movement_config,
};
pub use validation::{ValidationError, ValidationRule, validate_config};

use bevy::prelude::*;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/movement.ron";

/// Where the movement config is read from.
#[derive(Resource, Debug, Clone)]
pub struct ConfigSource(pub PathBuf);

pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementConfig>()
            .insert_resource(ConfigSource(self.path.clone()))
            .add_systems(PreStartup, load_config);
    }
}

fn load_config(mut commands: Commands, source: Res<ConfigSource>) {
    let config = match load_movement_config(&source.0) {
        Ok(config) => {
            info!(
                "Loaded movement config from {}: jump_height={:.1}, gravity_scale={:.3}",
                source.0.display(),
                config.jump_height(WORLD_GRAVITY),
                config.gravity_scale
            );
            config
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Using default movement config");
            MovementConfig::default()
        }
    };

    commands.insert_resource(config);
}

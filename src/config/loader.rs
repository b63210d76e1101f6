//! Loader for movement config files (RON or JSON).

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{MovementConfig, WORLD_GRAVITY};
use super::validation::validate_config;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// On-disk encodings accepted for a movement config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ron" => Some(ConfigFormat::Ron),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse config text without validating it.
pub fn parse_movement_config(
    contents: &str,
    format: ConfigFormat,
) -> Result<MovementConfig, String> {
    match format {
        ConfigFormat::Ron => ron_options()
            .from_str(contents)
            .map_err(|e| format!("Parse error: {}", e)),
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(|e| format!("Parse error: {}", e))
        }
    }
}

/// Load, resolve and validate a movement config.
/// Returns one error per problem found; validation errors are all reported.
pub fn load_movement_config(path: &Path) -> Result<MovementConfig, Vec<ConfigLoadError>> {
    let file_name = path.display().to_string();

    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        vec![ConfigLoadError {
            file: file_name.clone(),
            message: "unsupported extension (expected .ron or .json)".to_string(),
        }]
    })?;

    let contents = fs::read_to_string(path).map_err(|e| {
        vec![ConfigLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        }]
    })?;

    let mut config = parse_movement_config(&contents, format).map_err(|message| {
        vec![ConfigLoadError {
            file: file_name.clone(),
            message,
        }]
    })?;

    check_loaded(&config, &file_name)?;

    // Derived values can overflow even when the profile itself is valid
    if config.jump_profile.is_some() {
        config.apply_jump_profile(WORLD_GRAVITY);
        check_loaded(&config, &file_name)?;
    }

    Ok(config)
}

fn check_loaded(config: &MovementConfig, file_name: &str) -> Result<(), Vec<ConfigLoadError>> {
    let errors: Vec<ConfigLoadError> = validate_config(config)
        .into_iter()
        .map(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: e.to_string(),
        })
        .collect();
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

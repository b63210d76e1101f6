//! Config domain: tests for parsing, validation and jump-profile derivation.

use std::path::{Path, PathBuf};

use super::{
    ConfigFormat, JumpProfile, MovementConfig, ValidationRule, WORLD_GRAVITY,
    load_movement_config, parse_movement_config, validate_config,
};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "platformer_motion_{}_{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).expect("write temp config");
    path
}

// -----------------------------------------------------------------------------
// Defaults and jump profile
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&MovementConfig::default()).is_empty());
}

#[test]
fn test_default_matches_default_jump_profile() {
    let defaults = MovementConfig::default();
    let mut derived = MovementConfig {
        jump_profile: Some(JumpProfile::default()),
        ..Default::default()
    };

    derived.apply_jump_profile(WORLD_GRAVITY);

    assert!((derived.gravity_scale - defaults.gravity_scale).abs() < 1e-3);
    assert!((derived.jump_force - defaults.jump_force).abs() < 1e-2);
}

#[test]
fn test_jump_height_matches_profile() {
    let config = MovementConfig::default();
    let profile = JumpProfile::default();

    assert!((config.jump_height(WORLD_GRAVITY) - profile.jump_height).abs() < 0.1);
}

#[test]
fn test_apply_jump_profile_without_profile_is_noop() {
    let mut config = MovementConfig {
        gravity_scale: 3.0,
        jump_force: 500.0,
        ..Default::default()
    };

    config.apply_jump_profile(WORLD_GRAVITY);

    assert_eq!(config.gravity_scale, 3.0);
    assert_eq!(config.jump_force, 500.0);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_negative_time_rejected() {
    let config = MovementConfig {
        coyote_time: -0.1,
        ..Default::default()
    };

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "coyote_time");
    assert_eq!(errors[0].rule, ValidationRule::NonNegative);
}

#[test]
fn test_nan_and_infinity_rejected() {
    let config = MovementConfig {
        max_fall_speed: f32::NAN,
        jump_force: f32::INFINITY,
        ..Default::default()
    };

    let fields: Vec<_> = validate_config(&config).iter().map(|e| e.field).collect();

    assert!(fields.contains(&"max_fall_speed"));
    assert!(fields.contains(&"jump_force"));
}

#[test]
fn test_run_lerp_must_be_unit_interval() {
    for lerp in [-0.1, 1.5] {
        let config = MovementConfig {
            wall_jump_run_lerp: lerp,
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, ValidationRule::UnitInterval);
    }

    for lerp in [0.0, 1.0] {
        let config = MovementConfig {
            wall_jump_run_lerp: lerp,
            ..Default::default()
        };
        assert!(validate_config(&config).is_empty());
    }
}

#[test]
fn test_zero_sized_probe_rejected() {
    let mut config = MovementConfig::default();
    config.probes.wall_check.width = 0.0;

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "probes.wall_check.width");
    assert_eq!(errors[0].rule, ValidationRule::Positive);
}

#[test]
fn test_bad_jump_profile_rejected() {
    let config = MovementConfig {
        jump_profile: Some(JumpProfile {
            jump_height: 100.0,
            time_to_apex: 0.0,
        }),
        ..Default::default()
    };

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_profile.time_to_apex");
}

#[test]
fn test_load_rejects_overflowing_jump_profile() {
    let path = temp_config(
        "overflow.ron",
        "(jump_profile: (jump_height: 1e30, time_to_apex: 1e-10))",
    );

    let errors = load_movement_config(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(errors.iter().any(|e| e.message.contains("gravity_scale")));
    assert!(errors.iter().any(|e| e.message.contains("jump_force")));
}

#[test]
fn test_validation_collects_every_error() {
    let config = MovementConfig {
        coyote_time: -1.0,
        jump_input_buffer_time: -1.0,
        wall_jump_time: -1.0,
        ..Default::default()
    };

    assert_eq!(validate_config(&config).len(), 3);
}

#[test]
fn test_validation_error_display() {
    let config = MovementConfig {
        slide_speed: -5.0,
        ..Default::default()
    };

    let message = validate_config(&config)[0].to_string();

    assert!(message.contains("slide_speed"));
    assert!(message.contains("non-negative"));
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("a/movement.ron")),
        Some(ConfigFormat::Ron)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("movement.json")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(ConfigFormat::from_path(Path::new("movement.toml")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("movement")), None);
}

#[test]
fn test_parse_partial_ron_fills_defaults() {
    let config = parse_movement_config("(coyote_time: 0.2)", ConfigFormat::Ron).unwrap();

    assert_eq!(config.coyote_time, 0.2);
    assert_eq!(config.move_max_speed, MovementConfig::default().move_max_speed);
}

#[test]
fn test_parse_ron_implicit_some_profile() {
    let config = parse_movement_config(
        "(jump_profile: (jump_height: 64.0, time_to_apex: 0.25), \
         probes: (wall_check: (width: 6.0, height: 30.0)))",
        ConfigFormat::Ron,
    )
    .unwrap();

    assert_eq!(
        config.jump_profile,
        Some(JumpProfile {
            jump_height: 64.0,
            time_to_apex: 0.25
        })
    );
    assert_eq!(config.probes.wall_check.width, 6.0);
    assert_eq!(
        config.probes.ground_check,
        MovementConfig::default().probes.ground_check
    );
}

#[test]
fn test_parse_json() {
    let config = parse_movement_config(
        r#"{ "coyote_time": 0.15, "do_conserve_momentum": false }"#,
        ConfigFormat::Json,
    )
    .unwrap();

    assert_eq!(config.coyote_time, 0.15);
    assert!(!config.do_conserve_momentum);
}

#[test]
fn test_parse_error_reported() {
    let error = parse_movement_config("(coyote_time: \"soon\")", ConfigFormat::Ron).unwrap_err();
    assert!(error.starts_with("Parse error"));
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::DEFAULT_CONFIG_PATH);

    let config = load_movement_config(&path).expect("shipped config is valid");

    let defaults = MovementConfig::default();
    assert!((config.gravity_scale - defaults.gravity_scale).abs() < 1e-3);
    assert!((config.jump_force - defaults.jump_force).abs() < 1e-2);
    assert_eq!(config.coyote_time, defaults.coyote_time);
}

#[test]
fn test_load_applies_jump_profile() {
    let path = temp_config(
        "profile.json",
        r#"{ "jump_profile": { "jump_height": 100.0, "time_to_apex": 0.5 } }"#,
    );

    let config = load_movement_config(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    // g = 2h / t^2 = 800, v = g t = 400
    assert!((config.gravity_scale - 800.0 / WORLD_GRAVITY).abs() < 1e-4);
    assert!((config.jump_force - 400.0).abs() < 1e-3);
}

#[test]
fn test_load_rejects_invalid_values() {
    let path = temp_config("invalid.ron", "(coyote_time: -1.0, max_fall_speed: -2.0)");

    let errors = load_movement_config(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.message.contains("coyote_time")));
    assert!(errors.iter().any(|e| e.message.contains("max_fall_speed")));
}

#[test]
fn test_load_missing_file() {
    let errors = load_movement_config(Path::new("does/not/exist.ron")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("IO error"));
    assert!(errors[0].to_string().contains("does/not/exist.ron"));
}

#[test]
fn test_load_unsupported_extension() {
    let errors = load_movement_config(Path::new("movement.yaml")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unsupported extension"));
}

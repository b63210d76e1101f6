//! Validation of movement tuning values at load time.

use super::data::MovementConfig;

/// The constraint a rejected value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Finite and `>= 0`.
    NonNegative,
    /// Finite and `> 0`.
    Positive,
    /// Within `[0, 1]`.
    UnitInterval,
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationRule::NonNegative => write!(f, "a finite, non-negative number"),
            ValidationRule::Positive => write!(f, "a finite, positive number"),
            ValidationRule::UnitInterval => write!(f, "between 0 and 1"),
        }
    }
}

impl ValidationRule {
    fn accepts(self, value: f32) -> bool {
        match self {
            ValidationRule::NonNegative => value.is_finite() && value >= 0.0,
            ValidationRule::Positive => value.is_finite() && value > 0.0,
            ValidationRule::UnitInterval => (0.0..=1.0).contains(&value),
        }
    }
}

/// A rejected config value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub rule: ValidationRule,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.rule
        )
    }
}

impl std::error::Error for ValidationError {}

fn check(errors: &mut Vec<ValidationError>, field: &'static str, value: f32, rule: ValidationRule) {
    if !rule.accepts(value) {
        errors.push(ValidationError { field, value, rule });
    }
}

/// Check every top-level field against the same rule
macro_rules! check_fields {
    ($errors:expr, $config:expr, $rule:expr, $($field:ident),+ $(,)?) => {
        $(check(&mut $errors, stringify!($field), $config.$field, $rule);)+
    };
}

/// Validate all tuning values.
/// Returns every violation found, empty if the config is usable.
pub fn validate_config(config: &MovementConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_fields!(
        errors,
        config,
        ValidationRule::NonNegative,
        gravity_scale,
        fall_gravity_mult,
        max_fall_speed,
        fast_fall_gravity_mult,
        max_fast_fall_speed,
        move_max_speed,
        move_accel_amount,
        move_deccel_amount,
        accel_in_air,
        deccel_in_air,
        jump_force,
        jump_cut_gravity_mult,
        jump_hang_gravity_mult,
        jump_hang_time_threshold,
        wall_jump_force,
        wall_jump_time,
        slide_speed,
        slide_accel,
        coyote_time,
        jump_input_buffer_time,
    );
    check_fields!(
        errors,
        config,
        ValidationRule::UnitInterval,
        wall_jump_run_lerp
    );

    let probes = &config.probes;
    check(
        &mut errors,
        "probes.ground_check.width",
        probes.ground_check.width,
        ValidationRule::Positive,
    );
    check(
        &mut errors,
        "probes.ground_check.height",
        probes.ground_check.height,
        ValidationRule::Positive,
    );
    check(
        &mut errors,
        "probes.wall_check.width",
        probes.wall_check.width,
        ValidationRule::Positive,
    );
    check(
        &mut errors,
        "probes.wall_check.height",
        probes.wall_check.height,
        ValidationRule::Positive,
    );

    if let Some(profile) = &config.jump_profile {
        check(
            &mut errors,
            "jump_profile.jump_height",
            profile.jump_height,
            ValidationRule::Positive,
        );
        check(
            &mut errors,
            "jump_profile.time_to_apex",
            profile.time_to_apex,
            ValidationRule::Positive,
        );
    }

    errors
}

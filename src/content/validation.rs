//! Validation for movement tuning values.

use crate::movement::MovementTuning;

/// A validation error naming the offending tuning field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for range checks on f32 tuning fields.
/// At most one error is reported per field.
macro_rules! check_field {
    (@check $errors:expr, $tuning:expr, $field:ident, $ok:expr, $message:expr) => {
        let value: f32 = $tuning.$field;
        if !value.is_finite() {
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("must be finite, got {}", value),
            });
        } else if !($ok)(value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                message: format!("{}, got {}", $message, value),
            });
        }
    };
    ($errors:expr, $tuning:expr, $field:ident, non_negative) => {
        check_field!(@check $errors, $tuning, $field, |v: f32| v >= 0.0, "must be non-negative");
    };
    ($errors:expr, $tuning:expr, $field:ident, positive) => {
        check_field!(@check $errors, $tuning, $field, |v: f32| v > 0.0, "must be greater than zero");
    };
    ($errors:expr, $tuning:expr, $field:ident, finite) => {
        check_field!(@check $errors, $tuning, $field, |_v: f32| true, "");
    };
}

/// Validate every numeric field of the tuning.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Horizontal
    check_field!(errors, tuning, ground_acceleration, non_negative);
    check_field!(errors, tuning, air_acceleration, non_negative);
    check_field!(errors, tuning, ground_deceleration, non_negative);
    check_field!(errors, tuning, air_deceleration, non_negative);
    check_field!(errors, tuning, max_speed, positive);
    check_field!(errors, tuning, min_speed, non_negative);
    check_field!(errors, tuning, control_regain_rate, non_negative);

    // Jumping
    check_field!(errors, tuning, jump_height, non_negative);
    check_field!(errors, tuning, release_early_multiplier, non_negative);
    check_field!(errors, tuning, jump_buffer_time, positive);
    check_field!(errors, tuning, coyote_time, non_negative);
    check_field!(errors, tuning, apex_tolerance, non_negative);
    check_field!(errors, tuning, apex_multiplier, positive);

    // Falling
    check_field!(errors, tuning, fall_speed, non_negative);
    check_field!(errors, tuning, max_fall_speed, non_negative);

    // Walls
    check_field!(errors, tuning, wall_stamina, non_negative);
    check_field!(errors, tuning, wall_climb_stamina_multiplier, non_negative);
    check_field!(errors, tuning, wall_grab_down_deceleration, non_negative);
    check_field!(errors, tuning, wall_grab_up_deceleration, non_negative);
    check_field!(errors, tuning, wall_climb_speed, non_negative);
    check_field!(errors, tuning, wall_grab_slide_speed, non_negative);
    check_field!(errors, tuning, wall_top_nudge, non_negative);
    check_field!(errors, tuning, wall_slide_speed, non_negative);
    check_field!(errors, tuning, wall_jump_angle, finite);
    check_field!(errors, tuning, wall_jump_force, non_negative);
    check_field!(errors, tuning, wall_jump_vertical_bonus, non_negative);
    check_field!(errors, tuning, wall_climb_jump_force, non_negative);
    check_field!(errors, tuning, wall_climb_jump_cost, non_negative);
    check_field!(errors, tuning, wall_jump_cooldown, non_negative);

    // Dashing
    check_field!(errors, tuning, dash_speed, non_negative);
    check_field!(errors, tuning, dash_duration, positive);
    check_field!(errors, tuning, dash_buffer_time, positive);
    check_field!(errors, tuning, wave_dash_speed, non_negative);
    check_field!(errors, tuning, wave_dash_vertical_boost, non_negative);

    // Body
    check_field!(errors, tuning, gravity_scale, finite);
    check_field!(errors, tuning, ground_probe_length, positive);
    check_field!(errors, tuning, wall_probe_length, positive);

    errors
}

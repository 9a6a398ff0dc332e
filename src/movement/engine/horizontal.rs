//! Horizontal motion: deadzone snap, deceleration, capped acceleration.

use super::input::TickInput;
use super::lerp_clamped;
use super::state::MotionState;
use crate::movement::MovementTuning;

pub(super) fn apply(state: &mut MotionState, tuning: &MovementTuning, input: &TickInput, dt: f32) {
    state.at_apex = !state.dash.owns_velocity()
        && !state.contacts.grounded
        && !state.grabbing_wall
        && state.velocity.y.abs() < tuning.apex_tolerance;

    if !state.dash.owns_velocity() {
        steer(state, tuning, input, dt);
    }

    state.horizontal_control = (state.horizontal_control + tuning.control_regain_rate * dt).min(1.0);
}

fn steer(state: &mut MotionState, tuning: &MovementTuning, input: &TickInput, dt: f32) {
    let axis = input.axis.x;
    let grounded = state.contacts.grounded;

    if state.velocity.x.abs() < tuning.min_speed && axis == 0.0 {
        state.velocity.x = 0.0;
    }

    // Applies even with horizontal control disabled so imposed speed bleeds off.
    if axis == 0.0 || state.velocity.x.abs() > tuning.max_speed {
        let rate = if grounded {
            tuning.ground_deceleration
        } else {
            tuning.air_deceleration
        };
        state.velocity.x = lerp_clamped(state.velocity.x, 0.0, rate * dt);
    }

    if !tuning.abilities.horizontal || axis == 0.0 || state.grabbing_wall {
        return;
    }

    let multiplier = if state.at_apex {
        tuning.apex_multiplier
    } else {
        1.0
    };
    let acceleration = if grounded {
        tuning.ground_acceleration
    } else {
        tuning.air_acceleration
    };

    let step = axis * acceleration * dt * multiplier * state.horizontal_control;
    let candidate = state.velocity.x + step;
    if candidate.abs() <= tuning.max_speed * multiplier {
        state.velocity.x = candidate;
    }
}

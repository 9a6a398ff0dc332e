//! Dash and wavedash: `Idle -> Dashing -> (Idle | WaveDashing -> Idle)`.

use bevy::prelude::*;

use super::MotionEffect;
use super::input::TickInput;
use super::state::{DashPhase, MotionState};
use crate::movement::MovementTuning;
use crate::movement::components::Facing;

/// Remaining dash time at or below this counts as elapsed. Absorbs the
/// rounding left over from subtracting a fixed `dt` several times.
const DASH_TIME_EPSILON: f32 = 1e-4;

pub(super) fn apply(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    dt: f32,
    effects: &mut Vec<MotionEffect>,
) {
    match state.dash {
        DashPhase::Idle => try_start(state, tuning, input, dt, effects),
        DashPhase::WaveDashing => {
            state.dash = DashPhase::Idle;
            try_start(state, tuning, input, dt, effects);
        }
        DashPhase::Dashing {
            direction,
            remaining,
            restore_gravity_scale,
        } => {
            if tuning.abilities.wave_dash
                && state.contacts.grounded
                && state.jump_buffer.is_pending()
            {
                wave_dash(state, tuning, restore_gravity_scale, effects);
            } else if remaining <= DASH_TIME_EPSILON {
                finish(state, restore_gravity_scale, effects);
            } else {
                state.velocity = direction * tuning.dash_speed;
                state.dash = DashPhase::Dashing {
                    direction,
                    remaining: remaining - dt,
                    restore_gravity_scale,
                };
                effects.push(MotionEffect::DashTrail);
            }
        }
    }
}

/// Normalized input direction, or the facing direction when input is neutral.
pub fn dash_direction(axis: Vec2, facing: Facing) -> Vec2 {
    let direction = axis.normalize_or_zero();
    if direction == Vec2::ZERO {
        Vec2::new(facing.sign(), 0.0)
    } else {
        direction
    }
}

fn try_start(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    dt: f32,
    effects: &mut Vec<MotionEffect>,
) {
    if !tuning.abilities.dash || state.dashes_remaining == 0 || !state.dash_buffer.is_pending() {
        return;
    }

    state.dash_buffer.consume();
    state.dashes_remaining = state.dashes_remaining.saturating_sub(1);
    state.grabbing_wall = false;

    let direction = dash_direction(input.axis, state.facing);
    let restore_gravity_scale = state.gravity_scale;
    state.gravity_scale = 0.0;
    state.velocity = direction * tuning.dash_speed;
    state.dash = DashPhase::Dashing {
        direction,
        remaining: tuning.dash_duration - dt,
        restore_gravity_scale,
    };

    effects.push(MotionEffect::DashStarted { direction });
    effects.push(MotionEffect::DashTrail);
    debug!(
        "Dash: direction=({:.2}, {:.2}), dashes_remaining={}",
        direction.x, direction.y, state.dashes_remaining
    );
}

fn wave_dash(
    state: &mut MotionState,
    tuning: &MovementTuning,
    restore_gravity_scale: f32,
    effects: &mut Vec<MotionEffect>,
) {
    state.jump_buffer.consume();
    state.gravity_scale = restore_gravity_scale;
    state.velocity = Vec2::new(
        state.facing.sign() * tuning.wave_dash_speed,
        tuning.wave_dash_vertical_boost,
    );
    state.dash = DashPhase::WaveDashing;
    effects.push(MotionEffect::WaveDash);
    debug!("Wavedash: vx={:.2}", state.velocity.x);
}

fn finish(state: &mut MotionState, restore_gravity_scale: f32, effects: &mut Vec<MotionEffect>) {
    state.gravity_scale = restore_gravity_scale;
    state.velocity = Vec2::ZERO;
    state.dash = DashPhase::Idle;
    effects.push(MotionEffect::DashEnded);
    debug!("Dash ended");
}

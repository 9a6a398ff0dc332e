//! Vertical motion: recovery on ground, buffered multi-jump, falling.

use bevy::prelude::*;

use super::input::TickInput;
use super::state::MotionState;
use super::{MotionEffect, lerp_clamped};
use crate::movement::MovementTuning;

pub(super) fn apply(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    dt: f32,
    effects: &mut Vec<MotionEffect>,
) {
    let grounded = state.contacts.grounded;
    if grounded {
        state.recover(tuning);
    }

    // The dash writes velocity itself and may still want the jump buffer.
    if state.is_dashing() {
        return;
    }

    try_jump(state, tuning, effects);

    if !tuning.abilities.fall {
        return;
    }

    if state.grabbing_wall {
        let rate = if state.velocity.y < 0.0 {
            tuning.wall_grab_down_deceleration
        } else {
            tuning.wall_grab_up_deceleration
        };
        state.velocity.y = lerp_clamped(state.velocity.y, 0.0, rate * dt);
    } else if !grounded {
        fall(state, tuning, input, dt);
    }
}

fn try_jump(state: &mut MotionState, tuning: &MovementTuning, effects: &mut Vec<MotionEffect>) {
    let can_take_off = state.has_coyote_grace(tuning) || tuning.max_jumps > 1;
    if !tuning.abilities.jump
        || state.jumps_remaining == 0
        || !state.jump_buffer.is_pending()
        || !can_take_off
    {
        return;
    }

    if state.velocity.y < 0.0 {
        state.velocity.y = 0.0;
    }
    state.velocity.y += tuning.jump_height;
    state.jump_buffer.consume();
    state.jumps_remaining = state.jumps_remaining.saturating_sub(1);

    let air = !state.contacts.grounded;
    effects.push(MotionEffect::Jumped { air });
    debug!(
        "Jump: air={}, vy={:.2}, jumps_remaining={}",
        air, state.velocity.y, state.jumps_remaining
    );
}

fn fall(state: &mut MotionState, tuning: &MovementTuning, input: &TickInput, dt: f32) {
    let cap = -tuning.max_fall_speed;

    if state.velocity.y <= cap {
        state.velocity.y = lerp_clamped(state.velocity.y, cap, tuning.fall_speed * dt);
        return;
    }

    // Holding jump on the way up keeps the arc floaty; anything else falls harder.
    let mut step = tuning.fall_speed * dt;
    if !(state.velocity.y > 0.0 && input.jump_held) {
        step *= tuning.release_early_multiplier;
    }

    if state.velocity.y - step >= cap {
        state.velocity.y -= step;
    }
}

//! Wall interaction: grab with stamina, climbing, sliding and jumping off.

use bevy::prelude::*;

use super::MotionEffect;
use super::input::TickInput;
use super::state::MotionState;
use crate::movement::MovementTuning;
use crate::movement::components::WallContact;

/// Advance the climb-jump cooldown and decide whether the wall is held this tick.
pub(super) fn update_grab(state: &mut MotionState, tuning: &MovementTuning, input: &TickInput, dt: f32) {
    if state.wall_jump_cooldown_age < tuning.wall_jump_cooldown {
        state.wall_jump_cooldown_age += dt;
    }

    let abilities = tuning.abilities;
    state.grabbing_wall = abilities.wall
        && abilities.wall_climb
        && input.grab_held
        && state.contacts.single_wall() != WallContact::None
        && state.wall_stamina > 0.0
        && state.wall_jump_ready(tuning)
        && !state.is_dashing();
}

pub(super) fn apply(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    dt: f32,
    effects: &mut Vec<MotionEffect>,
) {
    if !tuning.abilities.wall {
        return;
    }

    if state.grabbing_wall {
        hold(state, tuning, input, dt, effects);
    } else if !state.dash.owns_velocity() {
        slide(state, tuning, input, effects);
    }

    if tuning.abilities.wall_jump && state.jump_buffer.is_pending() && !state.is_dashing() {
        jump_off(state, tuning, input, effects);
    }
}

fn hold(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    dt: f32,
    effects: &mut Vec<MotionEffect>,
) {
    let drain = if input.axis.y == 1.0 {
        dt * tuning.wall_climb_stamina_multiplier
    } else {
        dt
    };
    state.wall_stamina = (state.wall_stamina - drain).clamp(0.0, tuning.wall_stamina);
    if state.wall_stamina <= 0.0 {
        state.grabbing_wall = false;
        debug!("Wall grab released: out of stamina");
        return;
    }

    if input.axis.y > 0.0 {
        state.velocity.y = tuning.wall_climb_speed * dt;

        // Help over the lip once the upper rays see open space.
        if state.contacts.touching_top_right {
            state.velocity.x += tuning.wall_top_nudge;
        } else if state.contacts.touching_top_left {
            state.velocity.x -= tuning.wall_top_nudge;
        }
    } else if input.axis.y < 0.0 {
        state.velocity.y = -tuning.wall_grab_slide_speed * dt;
        effects.push(MotionEffect::WallSlide {
            direction: state.grabbed_wall().direction(),
        });
    }
}

fn slide(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    effects: &mut Vec<MotionEffect>,
) {
    if state.contacts.grounded || state.velocity.y >= 0.0 {
        return;
    }

    let wall = input.pressing_into(&state.contacts);
    if wall == WallContact::None {
        return;
    }

    state.velocity.y = state.velocity.y.max(-tuning.wall_slide_speed);
    effects.push(MotionEffect::WallSlide {
        direction: wall.direction(),
    });
}

fn jump_off(
    state: &mut MotionState,
    tuning: &MovementTuning,
    input: &TickInput,
    effects: &mut Vec<MotionEffect>,
) {
    let toward_wall = input.pressing_into(&state.contacts) != WallContact::None;

    if state.grabbing_wall && input.axis.y > 0.0 && !toward_wall {
        state.jump_buffer.consume();
        state.wall_stamina = (state.wall_stamina - tuning.wall_climb_jump_cost).max(0.0);
        state.velocity.y += tuning.wall_climb_jump_force;
        state.wall_jump_cooldown_age = 0.0;
        state.grabbing_wall = false;
        effects.push(MotionEffect::WallClimbJump);
        debug!(
            "Wall climb-jump: vy={:.2}, stamina={:.2}",
            state.velocity.y, state.wall_stamina
        );
    } else if !state.contacts.grounded && state.contacts.touching_wall() {
        state.velocity = Vec2::ZERO;
        state.jump_buffer.consume();
        state.grabbing_wall = false;

        // Push away from the wall: -1 off a right wall, +1 off a left one.
        let side = if state.contacts.touching_right {
            -1.0
        } else {
            1.0
        };
        let angle = side * tuning.wall_jump_angle;
        let mut launch = Vec2::new(angle.sin(), angle.cos()) * tuning.wall_jump_force;

        let push = input.horizontal_sign();
        if push == -side {
            state.horizontal_control = 0.0;
        } else if push == side {
            launch.y += tuning.wall_jump_vertical_bonus;
        }

        state.velocity = launch;
        effects.push(MotionEffect::WallJump { side });
        debug!(
            "Wall jump: side={}, launch=({:.2}, {:.2}), control={:.2}",
            side, launch.x, launch.y, state.horizontal_control
        );
    }
}

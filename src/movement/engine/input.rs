//! Per-tick input and the press buffers fed by it.

use bevy::prelude::*;

use super::state::MotionState;
use crate::movement::components::{Facing, WallContact};
use crate::movement::engine::CollisionProbes;
use crate::movement::{MovementInput, MovementTuning};

/// A single-use "pressed recently" latch.
///
/// A press makes the buffer pending and restarts its age. The age grows by
/// the tick duration; once it exceeds the window the press is forgotten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputBuffer {
    pending: bool,
    age: f32,
}

impl InputBuffer {
    pub fn press(&mut self) {
        self.pending = true;
        self.age = 0.0;
    }

    pub fn advance(&mut self, dt: f32, window: f32) {
        self.age += dt;
        if self.age > window {
            self.pending = false;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Take the buffered press. Returns whether one was pending.
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Everything the host samples for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Horizontal and vertical axis, each in [-1, 1].
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub grab_held: bool,
    pub dash_pressed: bool,
}

impl TickInput {
    /// Sign of the horizontal axis: -1, 0 or +1.
    pub fn horizontal_sign(&self) -> f32 {
        if self.axis.x > 0.0 {
            1.0
        } else if self.axis.x < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// The touched wall the horizontal input pushes into, if any.
    pub fn pressing_into(&self, contacts: &CollisionProbes) -> WallContact {
        if self.axis.x < 0.0 && contacts.touching_left {
            WallContact::Left
        } else if self.axis.x > 0.0 && contacts.touching_right {
            WallContact::Right
        } else {
            WallContact::None
        }
    }
}

impl From<&MovementInput> for TickInput {
    fn from(input: &MovementInput) -> Self {
        Self {
            axis: input.axis.clamp(Vec2::NEG_ONE, Vec2::ONE),
            jump_pressed: input.jump_just_pressed,
            jump_held: input.jump_held,
            grab_held: input.grab_held,
            dash_pressed: input.dash_just_pressed,
        }
    }
}

/// Latch this tick's button edges. Runs even for zero-length ticks.
pub(super) fn register_presses(state: &mut MotionState, input: &TickInput) {
    if input.jump_pressed {
        state.jump_buffer.press();
    }
    if input.dash_pressed {
        state.dash_buffer.press();
    }
}

pub(super) fn advance(state: &mut MotionState, tuning: &MovementTuning, input: &TickInput, dt: f32) {
    state.jump_buffer.advance(dt, tuning.jump_buffer_time);
    state.dash_buffer.advance(dt, tuning.dash_buffer_time);

    if let Some(facing) = Facing::from_axis(input.axis.x) {
        state.facing = facing;
    }
}

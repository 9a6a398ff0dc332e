//! Movement state engine: a fixed-step kinematic model of one platformer
//! character.
//!
//! Every tick runs the sub-models in a fixed order on one shared
//! [`MotionState`]:
//!
//! 1. input edges and press buffers
//! 2. horizontal motion
//! 3. vertical motion (recovery, jumps, falling)
//! 4. wall interaction (grab, slide, jump-off)
//! 5. dash / wavedash
//!
//! Later stages may overwrite what earlier ones wrote. The engine never
//! touches the world: collision probes come in as booleans and velocity plus
//! advisory [`MotionEffect`]s go out.

mod dash;
mod horizontal;
mod input;
mod probes;
mod state;
mod vertical;
mod wall;
#[cfg(test)]
mod tests;

pub use dash::dash_direction;
pub use input::{InputBuffer, TickInput};
pub use probes::{CollisionOracle, CollisionProbes};
pub use state::{DashPhase, MotionSnapshot, MotionState};

use bevy::prelude::*;

use crate::content::{ValidationError, validate_tuning};
use crate::movement::MovementTuning;

/// Fire-and-forget notifications for whoever renders the character.
/// Nothing here feeds back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEffect {
    /// First grounded tick after being airborne.
    Landed,
    Jumped { air: bool },
    /// Sliding down a wall; `direction` is -1 for a left wall, +1 for a right one.
    WallSlide { direction: f32 },
    WallClimbJump,
    /// Jumped off a wall; `side` is the push-off direction.
    WallJump { side: f32 },
    DashStarted { direction: Vec2 },
    DashTrail,
    DashEnded,
    WaveDash,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub effects: Vec<MotionEffect>,
}

/// Tuning rejected at construction.
#[derive(Debug)]
pub struct InvalidTuning {
    pub errors: Vec<ValidationError>,
}

impl std::fmt::Display for InvalidTuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid movement tuning")?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidTuning {}

/// One character's movement engine: its tuning plus the state it evolves.
#[derive(Component, Debug, Clone)]
pub struct MotionEngine {
    tuning: MovementTuning,
    state: MotionState,
}

impl MotionEngine {
    /// Build an engine with full resources. Rejects tuning that would let the
    /// simulation produce NaN or run away.
    pub fn new(tuning: MovementTuning) -> Result<Self, InvalidTuning> {
        let errors = validate_tuning(&tuning);
        if !errors.is_empty() {
            return Err(InvalidTuning { errors });
        }

        Ok(Self {
            state: MotionState::spawned(&tuning),
            tuning,
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut MotionState {
        &mut self.state
    }

    /// Adopt a velocity imposed from outside (collision response, bounce pads).
    pub fn sync_velocity(&mut self, velocity: Vec2) {
        if velocity.is_finite() {
            self.state.velocity = velocity;
        }
    }

    /// Advance one fixed step.
    ///
    /// A non-positive `dt` only latches button presses and returns the
    /// current velocity untouched.
    pub fn tick(&mut self, dt: f32, input: &TickInput, probes: CollisionProbes) -> TickOutput {
        let tuning = &self.tuning;
        let state = &mut self.state;
        let mut effects = Vec::new();

        input::register_presses(state, input);

        if dt > 0.0 {
            input::advance(state, tuning, input, dt);
            sense(state, probes, dt, &mut effects);
            wall::update_grab(state, tuning, input, dt);

            horizontal::apply(state, tuning, input, dt);
            vertical::apply(state, tuning, input, dt, &mut effects);
            wall::apply(state, tuning, input, dt, &mut effects);
            dash::apply(state, tuning, input, dt, &mut effects);
        }

        TickOutput {
            velocity: state.velocity,
            gravity_scale: state.gravity_scale,
            effects,
        }
    }

    /// Like [`tick`](Self::tick), querying `oracle` once for this step's probes.
    pub fn tick_with(
        &mut self,
        dt: f32,
        input: &TickInput,
        oracle: &impl CollisionOracle,
    ) -> TickOutput {
        let probes = oracle.probe();
        self.tick(dt, input, probes)
    }

    /// Drop everything back to the spawn state: zero velocity, no dash, full
    /// resources. Safe mid-dash; the body gravity scale comes back with it.
    pub fn die(&mut self) {
        let was_dashing = self.state.is_dashing();
        self.state = MotionState::spawned(&self.tuning);
        debug!("Motion reset on death (was_dashing={})", was_dashing);
    }
}

impl Default for MotionEngine {
    /// Engine on the default tuning, which always validates.
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            state: MotionState::spawned(&tuning),
            tuning,
        }
    }
}

/// Copy this tick's probes in and age the coyote timer.
fn sense(state: &mut MotionState, probes: CollisionProbes, dt: f32, effects: &mut Vec<MotionEffect>) {
    let was_grounded = state.contacts.grounded;
    state.contacts = probes;

    if probes.grounded {
        state.grounded_grace_age = 0.0;
        if !was_grounded {
            effects.push(MotionEffect::Landed);
        }
    } else {
        state.grounded_grace_age += dt;
    }
}

/// `from + (to - from) * t` with `t` clamped to [0, 1], so one step can never
/// overshoot its target.
pub(crate) fn lerp_clamped(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

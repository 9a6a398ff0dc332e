//! Mutable per-character motion state.

use bevy::prelude::*;
use serde::Serialize;

use super::input::InputBuffer;
use super::probes::CollisionProbes;
use crate::movement::MovementTuning;
use crate::movement::components::{Facing, WallContact};

/// Dash state machine. The countdown lives in `remaining` so a dash resumes
/// across ticks without suspending anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    Dashing {
        direction: Vec2,
        remaining: f32,
        restore_gravity_scale: f32,
    },
    /// Visible for exactly one tick after a wavedash launch.
    WaveDashing,
}

impl DashPhase {
    pub fn is_dashing(&self) -> bool {
        matches!(self, DashPhase::Dashing { .. })
    }

    pub fn is_wave_dashing(&self) -> bool {
        matches!(self, DashPhase::WaveDashing)
    }

    /// Whether the dash model owns horizontal velocity this tick.
    pub fn owns_velocity(&self) -> bool {
        !matches!(self, DashPhase::Idle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub velocity: Vec2,
    pub facing: Facing,
    pub jumps_remaining: u32,
    pub dashes_remaining: u32,
    pub wall_stamina: f32,
    /// Authority over horizontal acceleration, in [0, 1].
    pub horizontal_control: f32,
    pub jump_buffer: InputBuffer,
    pub dash_buffer: InputBuffer,
    /// Seconds since the ground was last touched (coyote time).
    pub grounded_grace_age: f32,
    /// Seconds since the last wall climb-jump; stops growing past the cooldown.
    pub wall_jump_cooldown_age: f32,
    pub dash: DashPhase,
    pub gravity_scale: f32,
    pub grabbing_wall: bool,
    pub contacts: CollisionProbes,
    pub at_apex: bool,
}

impl MotionState {
    /// Fresh state with every resource full and every timer expired.
    pub fn spawned(tuning: &MovementTuning) -> Self {
        Self {
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            jumps_remaining: tuning.max_jumps,
            dashes_remaining: tuning.max_dashes,
            wall_stamina: tuning.wall_stamina,
            horizontal_control: 1.0,
            jump_buffer: InputBuffer::default(),
            dash_buffer: InputBuffer::default(),
            grounded_grace_age: tuning.coyote_time,
            wall_jump_cooldown_age: tuning.wall_jump_cooldown,
            dash: DashPhase::Idle,
            gravity_scale: tuning.gravity_scale,
            grabbing_wall: false,
            contacts: CollisionProbes::default(),
            at_apex: false,
        }
    }

    /// Refill jumps, dashes and wall stamina.
    pub fn recover(&mut self, tuning: &MovementTuning) {
        self.jumps_remaining = tuning.max_jumps;
        self.dashes_remaining = tuning.max_dashes;
        self.wall_stamina = tuning.wall_stamina;
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_dashing()
    }

    pub fn is_wave_dashing(&self) -> bool {
        self.dash.is_wave_dashing()
    }

    pub fn is_grounded(&self) -> bool {
        self.contacts.grounded
    }

    /// Grounded now, or left the ground less than `coyote_time` ago.
    pub fn has_coyote_grace(&self, tuning: &MovementTuning) -> bool {
        self.contacts.grounded || self.grounded_grace_age < tuning.coyote_time
    }

    pub fn wall_jump_ready(&self, tuning: &MovementTuning) -> bool {
        self.wall_jump_cooldown_age >= tuning.wall_jump_cooldown
    }

    /// The wall currently held, if grabbing.
    pub fn grabbed_wall(&self) -> WallContact {
        if self.grabbing_wall {
            self.contacts.single_wall()
        } else {
            WallContact::None
        }
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            velocity_x: self.velocity.x,
            velocity_y: self.velocity.y,
            facing: self.facing.sign(),
            jumps_remaining: self.jumps_remaining,
            dashes_remaining: self.dashes_remaining,
            wall_stamina: self.wall_stamina,
            horizontal_control: self.horizontal_control,
            jump_buffered: self.jump_buffer.is_pending(),
            dash_buffered: self.dash_buffer.is_pending(),
            grounded: self.contacts.grounded,
            touching_left: self.contacts.touching_left,
            touching_right: self.contacts.touching_right,
            grabbing_wall: self.grabbing_wall,
            dashing: self.is_dashing(),
            wave_dashing: self.is_wave_dashing(),
            at_apex: self.at_apex,
            gravity_scale: self.gravity_scale,
        }
    }
}

/// Flat, serializable view of a [`MotionState`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionSnapshot {
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub facing: f32,
    pub jumps_remaining: u32,
    pub dashes_remaining: u32,
    pub wall_stamina: f32,
    pub horizontal_control: f32,
    pub jump_buffered: bool,
    pub dash_buffered: bool,
    pub grounded: bool,
    pub touching_left: bool,
    pub touching_right: bool,
    pub grabbing_wall: bool,
    pub dashing: bool,
    pub wave_dashing: bool,
    pub at_apex: bool,
    pub gravity_scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_state_is_full() {
        let tuning = MovementTuning::default();
        let state = MotionState::spawned(&tuning);
        assert_eq!(state.jumps_remaining, tuning.max_jumps);
        assert_eq!(state.dashes_remaining, tuning.max_dashes);
        assert_eq!(state.wall_stamina, tuning.wall_stamina);
        assert_eq!(state.horizontal_control, 1.0);
        assert!(!state.has_coyote_grace(&tuning));
        assert!(state.wall_jump_ready(&tuning));
    }

    #[test]
    fn test_recover_refills_resources() {
        let tuning = MovementTuning::default();
        let mut state = MotionState::spawned(&tuning);
        state.jumps_remaining = 0;
        state.dashes_remaining = 0;
        state.wall_stamina = 0.0;

        state.recover(&tuning);
        assert_eq!(state.jumps_remaining, tuning.max_jumps);
        assert_eq!(state.dashes_remaining, tuning.max_dashes);
        assert_eq!(state.wall_stamina, tuning.wall_stamina);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = MotionState::spawned(&MovementTuning::default());
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"jumps_remaining\":2"));
        assert!(json.contains("\"dashing\":false"));
    }

    #[test]
    fn test_grabbed_wall_requires_grab() {
        let mut state = MotionState::spawned(&MovementTuning::default());
        state.contacts.touching_right = true;
        assert_eq!(state.grabbed_wall(), WallContact::None);
        state.grabbing_wall = true;
        assert_eq!(state.grabbed_wall(), WallContact::Right);
    }
}

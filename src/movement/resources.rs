//! Movement domain: tuning and input resources.

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-mechanic switches. A disabled mechanic never writes velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementAbilities {
    pub horizontal: bool,
    pub jump: bool,
    pub fall: bool,
    pub wall: bool,
    pub wall_jump: bool,
    pub wall_climb: bool,
    pub dash: bool,
    pub wave_dash: bool,
}

impl Default for MovementAbilities {
    fn default() -> Self {
        Self {
            horizontal: true,
            jump: true,
            fall: true,
            wall: true,
            wall_jump: true,
            wall_climb: true,
            dash: true,
            wave_dash: true,
        }
    }
}

/// Movement tuning for one character. Copied into each engine at spawn and
/// never mutated afterwards.
///
/// Speeds are in world units per second, rates are per second. The climb and
/// grab-slide speeds are multiplied by the tick duration before being written
/// to velocity, so they read larger than the other speeds.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    // Horizontal
    pub ground_acceleration: f32,
    pub air_acceleration: f32,
    pub ground_deceleration: f32,
    pub air_deceleration: f32,
    pub max_speed: f32,
    /// Below this speed with no input, horizontal velocity snaps to zero.
    pub min_speed: f32,
    /// How fast horizontal control returns after a wall-jump lock (1/s).
    pub control_regain_rate: f32,

    // Jump
    pub jump_height: f32,
    pub release_early_multiplier: f32,
    pub max_jumps: u32,
    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    pub apex_tolerance: f32,
    pub apex_multiplier: f32,

    // Falling
    pub fall_speed: f32,
    pub max_fall_speed: f32,

    // Walls
    pub wall_stamina: f32,
    pub wall_climb_stamina_multiplier: f32,
    pub wall_grab_down_deceleration: f32,
    pub wall_grab_up_deceleration: f32,
    pub wall_climb_speed: f32,
    pub wall_grab_slide_speed: f32,
    pub wall_top_nudge: f32,
    /// Fall speed cap while pressing into a wall without grabbing.
    pub wall_slide_speed: f32,
    /// Launch angle in radians, measured from straight up.
    pub wall_jump_angle: f32,
    pub wall_jump_force: f32,
    pub wall_jump_vertical_bonus: f32,
    pub wall_climb_jump_force: f32,
    pub wall_climb_jump_cost: f32,
    pub wall_jump_cooldown: f32,

    // Dash
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub max_dashes: u32,
    pub dash_buffer_time: f32,
    pub wave_dash_speed: f32,
    pub wave_dash_vertical_boost: f32,

    /// Gravity scale the host body carries outside of dashes. The engine
    /// integrates falling itself, so hosts usually leave this at zero.
    pub gravity_scale: f32,

    // Probes (host side)
    pub ground_probe_length: f32,
    pub wall_probe_length: f32,

    pub abilities: MovementAbilities,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            ground_acceleration: 55.0,
            air_acceleration: 40.0,
            ground_deceleration: 5.0,
            air_deceleration: 5.0,
            max_speed: 5.0,
            min_speed: 0.25,
            control_regain_rate: 2.5,

            jump_height: 9.0,
            release_early_multiplier: 2.0,
            max_jumps: 2,
            jump_buffer_time: 0.15,
            coyote_time: 0.2,
            apex_tolerance: 1.0,
            apex_multiplier: 1.2,

            fall_speed: 30.0,
            max_fall_speed: 15.0,

            wall_stamina: 3.0,
            wall_climb_stamina_multiplier: 1.5,
            wall_grab_down_deceleration: 10.0,
            wall_grab_up_deceleration: 20.0,
            wall_climb_speed: 190.0,
            wall_grab_slide_speed: 300.0,
            wall_top_nudge: 2.0,
            wall_slide_speed: 3.0,
            wall_jump_angle: FRAC_PI_4,
            wall_jump_force: 10.0,
            wall_jump_vertical_bonus: 2.0,
            wall_climb_jump_force: 6.0,
            wall_climb_jump_cost: 0.5,
            wall_jump_cooldown: 0.2,

            dash_speed: 18.0,
            dash_duration: 0.15,
            max_dashes: 1,
            dash_buffer_time: 0.15,
            wave_dash_speed: 14.0,
            wave_dash_vertical_boost: 4.0,

            gravity_scale: 0.0,

            ground_probe_length: 0.1,
            wall_probe_length: 0.1,

            abilities: MovementAbilities::default(),
        }
    }
}

/// Input sampled by the host between fixed steps.
///
/// Edges are OR-ed in every frame and cleared by the fixed step that consumes
/// them, so a press is never lost when a frame runs zero or several steps.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub grab_held: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    pub fn clear_edges(&mut self) {
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
    }
}

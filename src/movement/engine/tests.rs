//! Movement engine: whole-tick scenarios and invariants.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{CollisionOracle, CollisionProbes, DashPhase, MotionEffect, MotionEngine, TickInput};
use crate::movement::MovementTuning;

const DT: f32 = 0.02;

fn engine(tuning: MovementTuning) -> MotionEngine {
    MotionEngine::new(tuning).unwrap()
}

fn grounded() -> CollisionProbes {
    CollisionProbes {
        grounded: true,
        ..default()
    }
}

fn airborne() -> CollisionProbes {
    CollisionProbes::default()
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_accepted() {
    assert!(MotionEngine::new(MovementTuning::default()).is_ok());
}

#[test]
fn test_invalid_tuning_is_rejected() {
    let tuning = MovementTuning {
        max_speed: 0.0,
        dash_duration: f32::NAN,
        ..default()
    };
    let err = MotionEngine::new(tuning).unwrap_err();
    assert_eq!(err.errors.len(), 2);
    assert!(err.to_string().contains("max_speed"));
    assert!(err.to_string().contains("dash_duration"));
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

#[test]
fn test_zero_dt_leaves_velocity_unchanged() {
    let mut engine = engine(MovementTuning::default());
    engine.sync_velocity(Vec2::new(0.1, -2.5));

    let out = engine.tick(0.0, &TickInput::default(), airborne());
    assert_eq!(out.velocity, Vec2::new(0.1, -2.5));
    assert!(out.effects.is_empty());

    // Mid-dash too.
    let mut engine = MotionEngine::new(MovementTuning::default()).unwrap();
    let dash = TickInput {
        dash_pressed: true,
        ..default()
    };
    let before = engine.tick(DT, &dash, airborne()).velocity;
    let out = engine.tick(0.0, &TickInput::default(), airborne());
    assert_eq!(out.velocity, before);
}

#[test]
fn test_zero_dt_still_latches_presses() {
    let mut engine = engine(MovementTuning::default());
    let jump = TickInput {
        jump_pressed: true,
        ..default()
    };
    engine.tick(0.0, &jump, grounded());
    assert!(engine.state().jump_buffer.is_pending());

    let out = engine.tick(DT, &TickInput::default(), grounded());
    assert!(out.velocity.y > 0.0);
}

#[test]
fn test_grounded_tick_restores_resources() {
    let tuning = MovementTuning::default();
    let mut engine = engine(tuning.clone());
    {
        let state = engine.state_mut();
        state.jumps_remaining = 0;
        state.dashes_remaining = 0;
        state.wall_stamina = 0.0;
    }

    let out = engine.tick(DT, &TickInput::default(), grounded());
    let state = engine.state();
    assert_eq!(state.jumps_remaining, tuning.max_jumps);
    assert_eq!(state.dashes_remaining, tuning.max_dashes);
    assert_eq!(state.wall_stamina, tuning.wall_stamina);
    assert!(out.effects.contains(&MotionEffect::Landed));
}

#[test]
fn test_jump_determinism() {
    let tuning = MovementTuning {
        jump_height: 5.0,
        max_jumps: 2,
        ..default()
    };
    let mut engine = engine(tuning);
    engine.sync_velocity(Vec2::new(0.0, -3.0));
    engine.state_mut().jumps_remaining = 2;

    let jump = TickInput {
        jump_pressed: true,
        ..default()
    };
    let out = engine.tick(DT, &jump, grounded());

    assert_eq!(out.velocity.y, 5.0);
    assert_eq!(engine.state().jumps_remaining, 1);
    assert!(out.effects.contains(&MotionEffect::Jumped { air: false }));
}

#[test]
fn test_dash_duration() {
    let tuning = MovementTuning {
        dash_duration: 0.5,
        dash_speed: 20.0,
        gravity_scale: 1.0,
        ..default()
    };
    let mut engine = engine(tuning);
    let dt = 0.1;

    let press = TickInput {
        axis: Vec2::X,
        dash_pressed: true,
        ..default()
    };
    let hold = TickInput {
        axis: Vec2::X,
        ..default()
    };

    for tick in 0..5 {
        let input = if tick == 0 { press } else { hold };
        let out = engine.tick(dt, &input, airborne());
        assert_eq!(out.velocity, Vec2::new(20.0, 0.0), "tick {}", tick + 1);
        assert_eq!(out.gravity_scale, 0.0);
        assert!(engine.state().is_dashing());
    }

    let out = engine.tick(dt, &hold, airborne());
    assert_eq!(out.velocity, Vec2::ZERO);
    assert_eq!(out.gravity_scale, 1.0);
    assert_eq!(engine.state().dash, DashPhase::Idle);
    assert!(out.effects.contains(&MotionEffect::DashEnded));
}

#[test]
fn test_wall_jump_control_lock_and_regain() {
    let tuning = MovementTuning {
        max_jumps: 1,
        control_regain_rate: 2.5,
        ..default()
    };
    let mut engine = engine(tuning);
    let right_wall = CollisionProbes {
        touching_right: true,
        ..default()
    };
    let jump_into_wall = TickInput {
        axis: Vec2::X,
        jump_pressed: true,
        ..default()
    };

    let out = engine.tick(DT, &jump_into_wall, right_wall);
    assert!(out.effects.contains(&MotionEffect::WallJump { side: -1.0 }));
    assert_eq!(engine.state().horizontal_control, 0.0);

    // 1 / 2.5 = 0.4 s = 20 ticks.
    let mut previous = 0.0;
    for _ in 0..20 {
        engine.tick(DT, &TickInput::default(), airborne());
        let control = engine.state().horizontal_control;
        assert!(control >= previous);
        assert!(control <= 1.0);
        previous = control;
    }
    assert!(previous > 1.0 - 1e-4);

    engine.tick(DT, &TickInput::default(), airborne());
    assert_eq!(engine.state().horizontal_control, 1.0);
}

#[test]
fn test_overcap_acceleration_is_discarded() {
    let mut engine = engine(MovementTuning::default());
    engine.sync_velocity(Vec2::new(4.9, 0.0));
    let push = TickInput {
        axis: Vec2::X,
        ..default()
    };
    let out = engine.tick(DT, &push, grounded());
    assert_eq!(out.velocity.x, 4.9);
}

#[test]
fn test_resources_stay_in_bounds_under_random_input() {
    let tuning = MovementTuning::default();
    let mut engine = engine(tuning.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for _ in 0..5_000 {
        let axis = Vec2::new(
            rng.random_range(-1..=1) as f32,
            rng.random_range(-1..=1) as f32,
        );
        let input = TickInput {
            axis,
            jump_pressed: rng.random_bool(0.1),
            jump_held: rng.random_bool(0.5),
            grab_held: rng.random_bool(0.5),
            dash_pressed: rng.random_bool(0.05),
        };
        let probes = CollisionProbes {
            grounded: rng.random_bool(0.3),
            touching_left: rng.random_bool(0.2),
            touching_right: rng.random_bool(0.2),
            touching_top_left: rng.random_bool(0.05),
            touching_top_right: rng.random_bool(0.05),
        };
        let dt = rng.random_range(0.001..0.05);

        let out = engine.tick(dt, &input, probes);
        let state = engine.state();

        assert!(out.velocity.is_finite());
        assert!(state.jumps_remaining <= tuning.max_jumps);
        assert!(state.dashes_remaining <= tuning.max_dashes);
        assert!(state.wall_stamina >= 0.0 && state.wall_stamina <= tuning.wall_stamina);
        assert!((0.0..=1.0).contains(&state.horizontal_control));
        assert!(!(state.is_dashing() && state.grabbing_wall));
        if state.grabbing_wall {
            assert!(state.wall_stamina > 0.0);
            assert!(state.contacts.touching_wall());
            assert!(input.grab_held);
        }
    }
}

// -----------------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------------

#[test]
fn test_jump_buffer_fires_on_landing() {
    let tuning = MovementTuning {
        max_jumps: 1,
        jump_buffer_time: 0.1,
        ..default()
    };
    let mut engine = engine(tuning);
    engine.sync_velocity(Vec2::new(0.0, -2.0));
    let jump = TickInput {
        jump_pressed: true,
        ..default()
    };

    // Pressed mid-air with no jumps available off the ground.
    engine.state_mut().jumps_remaining = 0;
    engine.tick(DT, &jump, airborne());
    engine.tick(DT, &TickInput::default(), airborne());
    assert!(engine.state().jump_buffer.is_pending());

    let out = engine.tick(DT, &TickInput::default(), grounded());
    assert!(out.velocity.y > 0.0);
    assert!(!engine.state().jump_buffer.is_pending());
}

#[test]
fn test_stale_jump_buffer_is_dropped() {
    let tuning = MovementTuning {
        max_jumps: 1,
        jump_buffer_time: 0.05,
        ..default()
    };
    let mut engine = engine(tuning);
    engine.state_mut().jumps_remaining = 0;
    let jump = TickInput {
        jump_pressed: true,
        ..default()
    };

    engine.tick(DT, &jump, airborne());
    for _ in 0..3 {
        engine.tick(DT, &TickInput::default(), airborne());
    }
    assert!(!engine.state().jump_buffer.is_pending());

    let out = engine.tick(DT, &TickInput::default(), grounded());
    assert!(out.velocity.y <= 0.0);
}

#[test]
fn test_coyote_jump_after_leaving_ledge() {
    let tuning = MovementTuning {
        max_jumps: 1,
        coyote_time: 0.1,
        ..default()
    };
    let mut engine = engine(tuning);
    engine.tick(DT, &TickInput::default(), grounded());
    engine.tick(DT, &TickInput::default(), airborne());

    let jump = TickInput {
        jump_pressed: true,
        ..default()
    };
    let out = engine.tick(DT, &jump, airborne());
    assert!(out.velocity.y > 0.0);
}

#[test]
fn test_dash_suppresses_gravity_and_steering() {
    let mut engine = engine(MovementTuning::default());
    let dash_up = TickInput {
        axis: Vec2::Y,
        dash_pressed: true,
        ..default()
    };
    engine.tick(DT, &dash_up, airborne());

    let steer = TickInput {
        axis: Vec2::NEG_X,
        ..default()
    };
    let out = engine.tick(DT, &steer, airborne());
    assert_eq!(out.velocity, Vec2::Y * engine.tuning().dash_speed);
}

#[test]
fn test_wave_dash_through_full_tick() {
    let tuning = MovementTuning {
        dash_duration: 0.3,
        ..default()
    };
    let mut engine = engine(tuning.clone());
    let dash_down_right = TickInput {
        axis: Vec2::new(1.0, -1.0),
        dash_pressed: true,
        ..default()
    };
    engine.tick(DT, &dash_down_right, airborne());

    let land_and_jump = TickInput {
        axis: Vec2::new(1.0, -1.0),
        jump_pressed: true,
        ..default()
    };
    let out = engine.tick(DT, &land_and_jump, grounded());
    assert!(out.effects.contains(&MotionEffect::WaveDash));
    assert_eq!(
        out.velocity,
        Vec2::new(tuning.wave_dash_speed, tuning.wave_dash_vertical_boost)
    );
    assert!(engine.state().is_wave_dashing());

    // The burst survives the following tick's horizontal model.
    let out = engine.tick(DT, &TickInput::default(), airborne());
    assert_eq!(out.velocity.x, tuning.wave_dash_speed);
    assert_eq!(engine.state().dash, DashPhase::Idle);
}

#[test]
fn test_die_mid_dash_resets_everything() {
    let tuning = MovementTuning {
        gravity_scale: 1.0,
        ..default()
    };
    let mut engine = engine(tuning.clone());
    let dash = TickInput {
        dash_pressed: true,
        ..default()
    };
    engine.tick(DT, &dash, airborne());
    assert!(engine.state().is_dashing());

    engine.die();
    let state = engine.state();
    assert_eq!(state.velocity, Vec2::ZERO);
    assert_eq!(state.dash, DashPhase::Idle);
    assert_eq!(state.gravity_scale, 1.0);
    assert_eq!(state.dashes_remaining, tuning.max_dashes);
    assert!(!state.jump_buffer.is_pending());
}

#[test]
fn test_dash_cancels_grab() {
    let mut engine = engine(MovementTuning::default());
    let left_wall = CollisionProbes {
        touching_left: true,
        ..default()
    };
    let hold = TickInput {
        grab_held: true,
        ..default()
    };
    engine.tick(DT, &hold, left_wall);
    assert!(engine.state().grabbing_wall);

    let dash = TickInput {
        grab_held: true,
        dash_pressed: true,
        axis: Vec2::X,
        ..default()
    };
    engine.tick(DT, &dash, left_wall);
    assert!(engine.state().is_dashing());
    assert!(!engine.state().grabbing_wall);

    engine.tick(DT, &hold, left_wall);
    assert!(!engine.state().grabbing_wall);
}

#[test]
fn test_wall_grab_runs_out_of_stamina() {
    let tuning = MovementTuning {
        wall_stamina: 0.1,
        ..default()
    };
    let mut engine = engine(tuning);
    let right_wall = CollisionProbes {
        touching_right: true,
        ..default()
    };
    let hold = TickInput {
        grab_held: true,
        ..default()
    };

    let mut grabbed_ticks = 0;
    for _ in 0..20 {
        engine.tick(DT, &hold, right_wall);
        if engine.state().grabbing_wall {
            grabbed_ticks += 1;
        }
    }
    assert_eq!(engine.state().wall_stamina, 0.0);
    assert!(!engine.state().grabbing_wall);
    assert!((4..=6).contains(&grabbed_ticks));
}

struct CountingOracle {
    probes: CollisionProbes,
    calls: std::cell::Cell<u32>,
}

impl CollisionOracle for CountingOracle {
    fn probe(&self) -> CollisionProbes {
        self.calls.set(self.calls.get() + 1);
        self.probes
    }
}

#[test]
fn test_oracle_is_queried_once_per_tick() {
    let mut engine = engine(MovementTuning::default());
    let oracle = CountingOracle {
        probes: grounded(),
        calls: std::cell::Cell::new(0),
    };
    for _ in 0..3 {
        engine.tick_with(DT, &TickInput::default(), &oracle);
    }
    assert_eq!(oracle.calls.get(), 3);
    assert!(engine.state().is_grounded());
}

//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::engine::MotionEngine;
use crate::movement::{ContactProbes, GameLayer, MovementTuning, Player, SpawnPoint};

/// Where the player first appears and respawns.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(-8.0, -2.0);

/// Player body size in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 0.9);

/// Build the player's engine, falling back to default tuning if the resource
/// was tampered with after loading.
fn build_engine(tuning: &MovementTuning) -> MotionEngine {
    MotionEngine::new(tuning.clone()).unwrap_or_else(|e| {
        warn!("{}; spawning player with default tuning", e);
        MotionEngine::default()
    })
}

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let engine = build_engine(&tuning);
    let gravity_scale = engine.state().gravity_scale;

    info!(
        "Spawning player at {:?}: max_speed={}, max_jumps={}, max_dashes={}",
        PLAYER_SPAWN, tuning.max_speed, tuning.max_jumps, tuning.max_dashes
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            engine,
            ContactProbes::default(),
            SpawnPoint(PLAYER_SPAWN),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(gravity_scale),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));
}

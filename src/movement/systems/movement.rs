//! Movement domain: fixed-step motion and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::engine::{MotionEngine, TickInput};
use crate::movement::{ContactProbes, MotionEffectEvent, MovementInput, Player, PlayerDied, SpawnPoint};

/// Advance every player's engine by one fixed step and write the result back
/// to the physics body.
pub(crate) fn step_motion(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    mut effects: MessageWriter<MotionEffectEvent>,
    mut query: Query<
        (
            Entity,
            &mut MotionEngine,
            &ContactProbes,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let tick_input = TickInput::from(&*input);

    for (entity, mut engine, probes, mut velocity, mut gravity) in &mut query {
        // Collision response and pads may have changed the body since last step.
        engine.sync_velocity(velocity.0);

        let out = engine.tick(dt, &tick_input, probes.0);
        velocity.0 = out.velocity;
        gravity.0 = out.gravity_scale;

        for effect in out.effects {
            effects.write(MotionEffectEvent { entity, effect });
        }
    }

    input.clear_edges();
}

/// Reset the engine and put the body back at its spawn point.
pub(crate) fn handle_player_death(
    mut events: MessageReader<PlayerDied>,
    mut query: Query<
        (
            &mut MotionEngine,
            &SpawnPoint,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for event in events.read() {
        let Ok((mut engine, spawn, mut transform, mut velocity, mut gravity)) =
            query.get_mut(event.entity)
        else {
            continue;
        };

        engine.die();
        transform.translation.x = spawn.0.x;
        transform.translation.y = spawn.0.y;
        velocity.0 = Vec2::ZERO;
        gravity.0 = engine.state().gravity_scale;
        info!("Player {:?} died, respawning at {:?}", event.entity, spawn.0);
    }
}

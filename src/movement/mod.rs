//! Movement domain: the character motion engine and its Bevy host systems.

mod bootstrap;
mod components;
mod dev;
pub mod engine;
mod events;
mod resources;
mod systems;

pub use components::*;
pub use dev::PlaygroundPlugin;
pub use events::{MotionEffectEvent, PlayerDied};
pub use resources::{MovementAbilities, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{handle_player_death, probe_contacts, read_input, step_motion};

/// Fixed simulation rate for the movement engine.
pub const FIXED_HZ: f64 = 50.0;

/// Ordering of the fixed-step movement systems. Anything that imposes
/// velocity on a player (pads, knockback) belongs before [`MotionSystems::Step`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionSystems {
    Sense,
    Step,
    Respawn,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<MotionEffectEvent>()
            .add_message::<PlayerDied>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .configure_sets(
                FixedUpdate,
                (
                    MotionSystems::Sense,
                    MotionSystems::Step,
                    MotionSystems::Respawn,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, probe_contacts.in_set(MotionSystems::Sense))
            .add_systems(FixedUpdate, step_motion.in_set(MotionSystems::Step))
            .add_systems(
                FixedUpdate,
                handle_player_death.in_set(MotionSystems::Respawn),
            );
    }
}

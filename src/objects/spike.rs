//! Objects domain: lethal spikes.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{Player, PlayerDied};

/// Sensor that kills a player on contact.
#[derive(Component, Debug, Default)]
pub struct Spike;

pub(crate) fn detect_spike_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut died: MessageWriter<PlayerDied>,
    spikes: Query<(), With<Spike>>,
    players: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (spike, player) in pairs {
            if spikes.contains(spike) && players.contains(player) {
                debug!("Player {:?} touched spike {:?}", player, spike);
                died.write(PlayerDied { entity: player });
            }
        }
    }
}

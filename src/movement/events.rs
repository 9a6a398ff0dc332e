//! Movement domain: messages emitted by the fixed-step systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::engine::MotionEffect;

/// An advisory effect produced by an entity's motion engine this step.
#[derive(Debug, Clone, Copy)]
pub struct MotionEffectEvent {
    pub entity: Entity,
    pub effect: MotionEffect,
}

impl Message for MotionEffectEvent {}

/// Event fired when a player touches something lethal
#[derive(Debug, Clone, Copy)]
pub struct PlayerDied {
    pub entity: Entity,
}

impl Message for PlayerDied {}

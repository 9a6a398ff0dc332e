//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::engine::CollisionProbes;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (spikes, triggers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Where the player reappears after dying.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

/// Probe results gathered by the host for the current fixed step.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ContactProbes(pub CollisionProbes);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// -1 for a wall on the left, +1 on the right, 0 without a wall.
    pub fn direction(self) -> f32 {
        match self {
            WallContact::None => 0.0,
            WallContact::Left => -1.0,
            WallContact::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing for a horizontal axis value, `None` when the axis is neutral.
    pub fn from_axis(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

//! Objects domain: bounce pads.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::Player;
use crate::movement::engine::MotionEngine;

/// How a pad turns the incoming velocity into a launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BounceMode {
    /// Launch along `angle` (radians from straight up, positive to the right).
    Fixed {
        angle: f32,
        speed: f32,
        /// Add the launch to the incoming velocity instead of replacing it.
        additive: bool,
    },
    /// Mirror the incoming velocity about `normal` and scale it.
    Reflect { normal: Vec2, strength: f32 },
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BouncePad {
    pub mode: BounceMode,
    /// Optional cap on the launch speed.
    pub max_speed: Option<f32>,
}

impl BouncePad {
    pub fn fixed(angle: f32, speed: f32) -> Self {
        Self {
            mode: BounceMode::Fixed {
                angle,
                speed,
                additive: false,
            },
            max_speed: None,
        }
    }

    pub fn reflect(normal: Vec2, strength: f32) -> Self {
        Self {
            mode: BounceMode::Reflect { normal, strength },
            max_speed: None,
        }
    }

    pub fn additive(mut self) -> Self {
        if let BounceMode::Fixed { additive, .. } = &mut self.mode {
            *additive = true;
        }
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    /// Velocity after bouncing off this pad with `velocity`.
    pub fn launch(&self, velocity: Vec2) -> Vec2 {
        let launched = match self.mode {
            BounceMode::Fixed {
                angle,
                speed,
                additive,
            } => {
                let push = Vec2::new(angle.sin(), angle.cos()) * speed;
                if additive { velocity + push } else { push }
            }
            BounceMode::Reflect { normal, strength } => {
                let n = normal.normalize_or_zero();
                (velocity - 2.0 * velocity.dot(n) * n) * strength
            }
        };

        match self.max_speed {
            Some(cap) => launched.clamp_length_max(cap.max(0.0)),
            None => launched,
        }
    }
}

/// Launch players that hit a pad, starting from the velocity the engine
/// last produced (the solver has already zeroed the body's).
pub(crate) fn apply_bounce_pads(
    mut collision_events: MessageReader<CollisionStart>,
    pads: Query<&BouncePad>,
    mut players: Query<(&mut MotionEngine, &mut LinearVelocity), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (pad_entity, player_entity) in pairs {
            let Ok(pad) = pads.get(pad_entity) else {
                continue;
            };
            let Ok((mut engine, mut velocity)) = players.get_mut(player_entity) else {
                continue;
            };

            let incoming = engine.state().velocity;
            let launched = pad.launch(incoming);
            engine.sync_velocity(launched);
            velocity.0 = launched;
            debug!(
                "Bounce: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                incoming.x, incoming.y, launched.x, launched.y
            );
        }
    }
}

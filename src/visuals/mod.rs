//! Visuals domain: cosmetic reactions to motion effects.
//!
//! Nothing here feeds back into movement. Wall slides kick up dust on the
//! wall side, dashes leave fading afterimages, and the player sprite flips
//! with facing.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::engine::{MotionEffect, MotionEngine};
use crate::movement::{Facing, MotionEffectEvent, Player};

const DUST_LIFETIME: f32 = 0.15;
const DUST_SIZE: Vec2 = Vec2::new(0.12, 0.25);
const AFTERIMAGE_LIFETIME: f32 = 0.2;
const AFTERIMAGE_ALPHA: f32 = 0.5;

/// Master switch for effect spawning.
#[derive(Resource, Debug, Clone)]
pub struct VisualSettings {
    pub enabled: bool,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Short-lived cosmetic entity whose alpha drains to zero.
#[derive(Component, Debug)]
pub struct Fading {
    pub remaining: f32,
    pub lifetime: f32,
    pub start_alpha: f32,
}

impl Fading {
    pub fn new(lifetime: f32, start_alpha: f32) -> Self {
        Self {
            remaining: lifetime,
            lifetime,
            start_alpha,
        }
    }

    pub fn alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        self.start_alpha * (self.remaining / self.lifetime).clamp(0.0, 1.0)
    }
}

/// Dust puff marker; its x scale points away from the wall.
#[derive(Component, Debug)]
pub struct WallDust;

/// Dash afterimage marker.
#[derive(Component, Debug)]
pub struct Afterimage;

/// Where dust appears for a wall on `direction` (-1 left, +1 right).
pub fn dust_offset(direction: f32, half_size: Vec2) -> Vec2 {
    Vec2::new(direction * half_size.x, -half_size.y * 0.5)
}

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisualSettings>().add_systems(
            Update,
            (
                spawn_motion_effects.run_if(|settings: Res<VisualSettings>| settings.enabled),
                fade_out,
                face_sprite,
            ),
        );
    }
}

fn spawn_motion_effects(
    mut commands: Commands,
    mut events: MessageReader<MotionEffectEvent>,
    players: Query<(&Transform, &Sprite), With<Player>>,
) {
    for event in events.read() {
        let Ok((transform, sprite)) = players.get(event.entity) else {
            continue;
        };
        let half = sprite.custom_size.unwrap_or(Vec2::ONE) * 0.5;
        let position = transform.translation;

        match event.effect {
            MotionEffect::WallSlide { direction } => {
                let offset = dust_offset(direction, half);
                commands.spawn((
                    WallDust,
                    Fading::new(DUST_LIFETIME, 0.8),
                    Sprite {
                        color: Color::srgba(0.8, 0.8, 0.75, 0.8),
                        custom_size: Some(DUST_SIZE),
                        ..default()
                    },
                    Transform::from_xyz(position.x + offset.x, position.y + offset.y, 0.5)
                        .with_scale(Vec3::new(direction, 1.0, 1.0)),
                ));
            }
            MotionEffect::DashTrail => {
                commands.spawn((
                    Afterimage,
                    Fading::new(AFTERIMAGE_LIFETIME, AFTERIMAGE_ALPHA),
                    Sprite {
                        color: sprite.color.with_alpha(AFTERIMAGE_ALPHA),
                        custom_size: sprite.custom_size,
                        flip_x: sprite.flip_x,
                        ..default()
                    },
                    Transform::from_xyz(position.x, position.y, position.z - 0.1),
                ));
            }
            _ => {}
        }
    }
}

fn fade_out(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Fading, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut fading, mut sprite) in &mut query {
        fading.remaining -= dt;
        if fading.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let alpha = fading.alpha();
        sprite.color.set_alpha(alpha);
    }
}

fn face_sprite(mut query: Query<(&MotionEngine, &mut Sprite), With<Player>>) {
    for (engine, mut sprite) in &mut query {
        let flip = engine.state().facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

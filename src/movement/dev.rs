//! Movement domain: playground room and debug-only helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::objects::{BouncePad, Spike};

/// Test room for trying out every mechanic, plus dev hotkeys when the
/// `dev-tools` feature is on.
pub struct PlaygroundPlugin;

impl Plugin for PlaygroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, (dump_motion_snapshot, adjust_simulation_speed));
    }
}

fn solid(
    commands: &mut Commands,
    size: Vec2,
    position: Vec2,
    color: Color,
    layers: CollisionLayers,
) -> Entity {
    commands
        .spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ))
        .id()
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let pad_color = Color::srgb(0.3, 0.7, 0.9);
    let spike_color = Color::srgb(0.85, 0.2, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground
    solid(
        &mut commands,
        Vec2::new(28.0, 1.0),
        Vec2::new(0.0, -6.0),
        ground_color,
        ground_layers,
    );

    // Side walls
    for x in [-14.0, 14.0] {
        solid(
            &mut commands,
            Vec2::new(1.0, 14.0),
            Vec2::new(x, 0.5),
            wall_color,
            wall_layers,
        );
    }

    // Platforms, low to high
    for (size, position) in [
        (Vec2::new(4.0, 0.5), Vec2::new(-6.0, -2.0)),
        (Vec2::new(4.0, 0.5), Vec2::new(6.0, 0.0)),
        (Vec2::new(3.0, 0.5), Vec2::new(0.0, 3.0)),
    ] {
        solid(&mut commands, size, position, platform_color, ground_layers);
    }

    // Pillar for wall jump and climb practice; short enough to mantle over
    solid(
        &mut commands,
        Vec2::new(0.8, 4.0),
        Vec2::new(-3.0, -3.5),
        wall_color,
        wall_layers,
    );

    // Launch pad straight up, and a reflecting pad that keeps momentum
    let launch = solid(
        &mut commands,
        Vec2::new(1.5, 0.5),
        Vec2::new(9.0, -5.25),
        pad_color,
        ground_layers,
    );
    commands
        .entity(launch)
        .insert(BouncePad::fixed(0.0, 14.0));

    let reflect = solid(
        &mut commands,
        Vec2::new(1.5, 0.5),
        Vec2::new(-11.0, -5.25),
        pad_color,
        ground_layers,
    );
    commands
        .entity(reflect)
        .insert(BouncePad::reflect(Vec2::Y, 1.3).with_max_speed(20.0));

    // Spikes
    commands.spawn((
        Spike,
        Sprite {
            color: spike_color,
            custom_size: Some(Vec2::new(2.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(3.0, -5.3, 0.0),
        RigidBody::Static,
        Collider::rectangle(2.0, 0.4),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    info!("Spawned playground room");
}

/// F3: log every player's motion state as JSON.
#[cfg(feature = "dev-tools")]
fn dump_motion_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, &crate::movement::engine::MotionEngine)>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (entity, engine) in &query {
        match serde_json::to_string_pretty(&engine.state().snapshot()) {
            Ok(json) => info!("Motion snapshot for {:?}:\n{}", entity, json),
            Err(e) => warn!("Failed to serialize motion snapshot: {}", e),
        }
    }
}

/// `[` / `]` slow down / speed up the simulation, `\` resets it.
#[cfg(feature = "dev-tools")]
fn adjust_simulation_speed(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut speed: ResMut<crate::core::SimulationSpeed>,
) {
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        speed.step(-0.25);
    }
    if keyboard.just_pressed(KeyCode::BracketRight) {
        speed.step(0.25);
    }
    if keyboard.just_pressed(KeyCode::Backslash) {
        speed.set(1.0);
    }
}

use avian2d::prelude::*;
use bevy::prelude::*;

use wallkick::{content, core, movement, objects, visuals};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wallkick".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            content::ContentPlugin::default(),
            core::CorePlugin,
            movement::MovementPlugin,
            objects::ObjectsPlugin,
            visuals::VisualsPlugin,
            movement::PlaygroundPlugin,
        ))
        .run();
}

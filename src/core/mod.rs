//! Core domain: camera and global time scaling.

mod resources;
mod systems;

pub use resources::SimulationSpeed;
pub use systems::PIXELS_PER_UNIT;

use bevy::prelude::*;

use crate::core::systems::{apply_simulation_speed, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationSpeed>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, apply_simulation_speed);
    }
}

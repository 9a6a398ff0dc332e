//! Core domain: camera setup and time scaling.

use bevy::prelude::*;

use crate::core::resources::SimulationSpeed;

/// World units are small, so the camera zooms in: one unit spans this many pixels.
pub const PIXELS_PER_UNIT: f32 = 40.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Push the current [`SimulationSpeed`] into virtual time.
pub(crate) fn apply_simulation_speed(
    speed: Res<SimulationSpeed>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !speed.is_changed() {
        return;
    }
    time.set_relative_speed(speed.get());
    info!("Simulation speed set to {:.2}", speed.get());
}

//! Core domain: shared resources.

use bevy::prelude::*;

/// Global simulation speed multiplier applied to virtual time.
/// Always within `[0, MAX]`; 0 freezes the simulation.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationSpeed {
    speed: f32,
}

impl SimulationSpeed {
    pub const MAX: f32 = 10.0;

    pub fn new(speed: f32) -> Self {
        let mut s = Self::default();
        s.set(speed);
        s
    }

    pub fn get(&self) -> f32 {
        self.speed
    }

    /// Set the speed, clamped to `[0, MAX]`. Non-finite values are ignored.
    pub fn set(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed.clamp(0.0, Self::MAX);
        }
    }

    pub fn step(&mut self, delta: f32) {
        self.set(self.speed + delta);
    }
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

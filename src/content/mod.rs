//! Content domain: movement tuning loaded from `assets/data`.

mod loader;
mod validation;

pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/movement.ron";

/// Loads [`MovementTuning`] at startup, falling back to defaults with a warning.
pub struct ContentPlugin {
    pub tuning_path: String,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            tuning_path: TUNING_PATH.to_string(),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_tuning(Path::new(&self.tuning_path)) {
            Ok(tuning) => {
                info!("Loaded movement tuning from {}", self.tuning_path);
                tuning
            }
            Err(e) => {
                warn!("{}; using default movement tuning", e);
                MovementTuning::default()
            }
        };
        app.insert_resource(tuning);
    }
}

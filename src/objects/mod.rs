//! Objects domain: level pieces that act on the player through collisions.

mod bounce;
mod spike;

pub use bounce::{BounceMode, BouncePad};
pub use spike::Spike;

use bevy::prelude::*;

use crate::movement::MotionSystems;
use crate::objects::bounce::apply_bounce_pads;
use crate::objects::spike::detect_spike_contacts;

pub struct ObjectsPlugin;

impl Plugin for ObjectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (apply_bounce_pads, detect_spike_contacts).before(MotionSystems::Step),
        );
    }
}

//! Movement domain: system modules for sampling, probing and stepping.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::probe_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{handle_player_death, step_motion};

//! Platformer character movement: a fixed-step motion engine with wall
//! grabs, wall jumps, dashes and wavedashes, hosted on Bevy and avian2d.

pub mod content;
pub mod core;
pub mod movement;
pub mod objects;
pub mod visuals;

//! Spatial state shared by combatants.
mod geometry;

pub use geometry::{BoundingBox, Direction};

//! Physics for the 2D N-body engine
//!
//! The engine is O(n²) per tick and targets tens to low hundreds of bodies.

pub mod body;
pub mod collisions;
pub mod focus;
pub mod gravity;
pub mod integrators;
pub mod math;
pub mod spacetime;
pub mod trail;

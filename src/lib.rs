//! Spacetime library
//!
//! A two-dimensional N-body gravity engine. Bodies attract each other
//! pairwise, merge when they overlap, and keep a short trail of recent
//! positions for renderers. [`Spacetime`] is the engine; the plugins wire it
//! into a headless Bevy app that plays the role of the scheduler.

pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod scenario;
pub mod states;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use error::SpacetimeError;
pub use physics::{
    body::{Body, BodyDescriptor},
    integrators,
    math::{Scalar, Vector},
    spacetime::{Spacetime, SpacetimeStats},
    trail::Trail,
};
pub use plugins::{SimulationDiagnosticsPlugin, SimulationPlugin};

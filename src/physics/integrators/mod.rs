//! Numerical integration methods for the tick update
//!
//! Accelerations are computed once per tick from the pre-step positions of
//! every body, so integrators here are single-stage: they receive a fixed
//! acceleration and advance one body's state by `dt`.

use crate::physics::math::{Scalar, Vector};

pub mod explicit_euler;
pub mod registry;
pub mod symplectic_euler;

pub use explicit_euler::ExplicitEuler;
pub use registry::IntegratorRegistry;
pub use symplectic_euler::SymplecticEuler;

/// Base trait for all integrators
pub trait Integrator: Send + Sync + std::fmt::Debug {
    /// Create a boxed clone of this integrator
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Advance a single body's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `acceleration` - Acceleration accumulated for this tick
    /// * `dt` - Time step
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Get the canonical name of this integrator
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Get the order of this integrator
    fn convergence_order(&self) -> usize;
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

//! Explicit Euler integration method (forward Euler)
//!
//! WARNING: This integrator is provided for comparison only. It updates
//! position with the old velocity, which makes orbits spiral outward as
//! energy drifts.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Explicit Euler integrator (forward Euler method)
///
/// # Algorithm
///
/// ```text
/// x(t+dt) = x(t) + v(t) * dt
/// v(t+dt) = v(t) + a(t) * dt
/// ```
///
/// | Property      | Explicit Euler | Symplectic Euler |
/// |---------------|----------------|------------------|
/// | Order         | 1              | 1                |
/// | Force evals   | 1              | 1                |
/// | Symplectic    | No             | Yes              |
/// | Energy drift  | Exponential    | Bounded          |
#[derive(Debug, Copy, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Position uses the velocity from the start of the step
        *position += *velocity * dt;
        *velocity += acceleration * dt;
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["forward_euler"]
    }

    fn convergence_order(&self) -> usize {
        1
    }
}

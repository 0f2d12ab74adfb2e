//! Symplectic Euler integration method
//!
//! The default integrator. Velocity is advanced first from the tick's
//! acceleration, then position is advanced with the *new* velocity. Keeping
//! this order is what makes trajectories reproducible between runs and
//! between implementations of the engine.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// # Algorithm
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// First order, one force evaluation per step, and bounded energy error for
/// conservative systems. Also called the Euler-Cromer method.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Update velocity first: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;

        // Then update position using new velocity: x(t+dt) = x(t) + v(t+dt) * dt
        *position += *velocity * dt;
    }

    fn name(&self) -> &'static str {
        "symplectic_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["euler", "semi_implicit_euler", "euler_cromer"]
    }

    fn convergence_order(&self) -> usize {
        1
    }
}

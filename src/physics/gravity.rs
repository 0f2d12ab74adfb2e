//! Pairwise gravitational acceleration
//!
//! The gravitational constant is folded into the mass units. Squared
//! separations are clamped to at least one so coincident or nearly
//! coincident bodies produce a finite pull.

use crate::physics::body::Body;
use crate::physics::math::{self, Scalar, Vector};

/// Smallest squared separation used in the force law
pub const MIN_SQUARED_DISTANCE: Scalar = 1.0;

/// Acceleration that `source` imparts on a body at `position`
#[inline]
pub fn acceleration_towards(position: Vector, source: &Body) -> Vector {
    let distance = math::distance(position, source.position);
    let angle = math::angle(position, source.position);
    let magnitude = source.mass / (distance * distance).max(MIN_SQUARED_DISTANCE);

    Vector::new(libm::cos(angle) * magnitude, libm::sin(angle) * magnitude)
}

/// Accumulated acceleration for every body, indexed like `bodies`.
///
/// Contributions are summed from the last body in registry order to the
/// first, which fixes the floating point result.
///
/// The result is scratch state for a single tick: it is computed from the
/// pre-step positions of all bodies and must be consumed before any of them
/// move.
pub fn accelerations(bodies: &[Body]) -> Vec<Vector> {
    bodies
        .iter()
        .enumerate()
        .map(|(a, body)| {
            bodies
                .iter()
                .enumerate()
                .rev()
                .filter(|(b, _)| *b != a)
                .fold(Vector::ZERO, |acc, (_, other)| {
                    acc + acceleration_towards(body.position, other)
                })
        })
        .collect()
}

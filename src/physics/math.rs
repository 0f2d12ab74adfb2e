//! Scalar geometry helpers shared by the physics modules
//!
//! Transcendental functions go through `libm` so trajectories are identical
//! on every target, including wasm.

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities, and accelerations
pub type Vector = bevy::math::DVec2;

pub const PI: Scalar = core::f64::consts::PI;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vector, b: Vector) -> Scalar {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    libm::sqrt(dx * dx + dy * dy)
}

/// Angle of the ray pointing from `from` towards `to`, in radians
#[inline]
pub fn angle(from: Vector, to: Vector) -> Scalar {
    libm::atan2(to.y - from.y, to.x - from.x)
}

#[inline]
pub fn speed(velocity: Vector) -> Scalar {
    libm::sqrt(velocity.x * velocity.x + velocity.y * velocity.y)
}

#[inline]
pub fn momentum_magnitude(velocity: Vector, mass: Scalar) -> Scalar {
    speed(velocity) * mass
}

/// Overlap and trail radius of a body.
///
/// The expression is evaluated strictly left to right,
/// `cbrt(mass * density * multiplier / 4 / 3 * PI)`. Renderers size bodies
/// with the same shape, so it must not be "corrected" to the volume
/// inversion of a sphere.
#[inline]
pub fn radius(mass: Scalar, density: Scalar, mass_multiplier: Scalar) -> Scalar {
    libm::cbrt(mass * density * mass_multiplier / 4.0 / 3.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: Scalar = 1e-12;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(4.0, 6.0);

        assert!((distance(a, b) - 5.0).abs() < EPSILON);
        assert!((distance(b, a) - 5.0).abs() < EPSILON);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_angle_quadrants() {
        let origin = Vector::ZERO;

        assert!(angle(origin, Vector::new(1.0, 0.0)).abs() < EPSILON);
        assert!((angle(origin, Vector::new(0.0, 1.0)) - PI / 2.0).abs() < EPSILON);
        assert!((angle(origin, Vector::new(-1.0, 0.0)) - PI).abs() < EPSILON);
        assert!((angle(origin, Vector::new(0.0, -1.0)) + PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_speed_and_momentum() {
        let velocity = Vector::new(3.0, -4.0);

        assert!((speed(velocity) - 5.0).abs() < EPSILON);
        assert!((momentum_magnitude(velocity, 2.5) - 12.5).abs() < EPSILON);
        assert_eq!(speed(Vector::ZERO), 0.0);
    }

    #[test]
    fn test_radius_matches_reference_shape() {
        // 12 / PI * PI / 12 == 1
        let r = radius(12.0 / PI, 1.0, 1.0);
        assert!((r - 1.0).abs() < 1e-12, "radius was {r}");

        // Eight times the mass doubles the radius
        let small = radius(10.0, 1.0, 2.0);
        let large = radius(80.0, 1.0, 2.0);
        assert!((large / small - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_radius_scales_with_multiplier_and_density() {
        let base = radius(10.0, 1.0, 1.0);

        assert!((radius(10.0, 8.0, 1.0) / base - 2.0).abs() < 1e-12);
        assert!((radius(10.0, 1.0, 27.0) / base - 3.0).abs() < 1e-12);
    }
}

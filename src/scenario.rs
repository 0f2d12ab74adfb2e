//! Seeded random starting populations for the headless app

use crate::config::ScenarioConfig;
use crate::physics::body::BodyDescriptor;
use crate::physics::math::{PI, Scalar, Vector};
use crate::resources::SharedRng;
use rand::Rng;

/// Bodies never spawn closer to the origin than this fraction of the spawn
/// radius, leaving room for the central mass.
const INNER_RADIUS_FRACTION: Scalar = 0.1;

/// Uniformly distributed point in the annulus `[inner, outer]`
pub fn random_position(rng: &mut SharedRng, inner: Scalar, outer: Scalar) -> Vector {
    let theta = rng.random_range(0.0..2.0 * PI);
    // Area-uniform radius
    let u = rng.random_range((inner * inner)..=(outer * outer));
    let r = libm::sqrt(u);

    Vector::new(r * libm::cos(theta), r * libm::sin(theta))
}

/// Random velocity with magnitude up to `max_speed` in a random direction
pub fn random_velocity(rng: &mut SharedRng, max_speed: Scalar) -> Vector {
    if max_speed <= 0.0 {
        return Vector::ZERO;
    }

    let theta = rng.random_range(0.0..2.0 * PI);
    let speed = rng.random_range(0.0..=max_speed);

    Vector::new(speed * libm::cos(theta), speed * libm::sin(theta))
}

/// Velocity of a circular orbit around a mass `central_mass` at the origin
pub fn circular_orbit_velocity(position: Vector, central_mass: Scalar) -> Vector {
    let r = position.length();
    if r <= 0.0 {
        return Vector::ZERO;
    }

    // a = M / r^2 = v^2 / r
    let speed = libm::sqrt(central_mass / r);
    Vector::new(-position.y, position.x) / r * speed
}

fn random_in(rng: &mut SharedRng, min: Scalar, max: Scalar) -> Scalar {
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}

/// Builds a starting population.
///
/// With a central mass configured, a focused body sits at rest at the
/// origin and the others start on roughly circular orbits around it.
pub fn generate_bodies(rng: &mut SharedRng, config: &ScenarioConfig) -> Vec<BodyDescriptor> {
    let mut bodies = Vec::with_capacity(config.body_count + 1);

    if let Some(central_mass) = config.central_mass {
        bodies.push(BodyDescriptor::new(0.0, 0.0, central_mass, config.max_density).with_focus());
    }

    let inner = config.spawn_radius * INNER_RADIUS_FRACTION;

    for _ in 0..config.body_count {
        let position = random_position(rng, inner, config.spawn_radius);
        let mut velocity = random_velocity(rng, config.max_initial_speed);
        if let Some(central_mass) = config.central_mass {
            velocity += circular_orbit_velocity(position, central_mass);
        }

        let mass = random_in(rng, config.min_mass, config.max_mass);
        let density = random_in(rng, config.min_density, config.max_density);

        bodies.push(
            BodyDescriptor::new(position.x, position.y, mass, density)
                .with_velocity(velocity.x, velocity.y),
        );
    }

    bodies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_stay_in_annulus() {
        let mut rng = SharedRng::from_seed(7);

        for _ in 0..10_000 {
            let r = random_position(&mut rng, 10.0, 100.0).length();
            assert!((10.0 - 1e-9..=100.0 + 1e-9).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn test_velocity_magnitude_bounded() {
        let mut rng = SharedRng::from_seed(7);

        for _ in 0..10_000 {
            assert!(random_velocity(&mut rng, 2.0).length() <= 2.0 + 1e-12);
        }
        assert_eq!(random_velocity(&mut rng, 0.0), Vector::ZERO);
    }

    #[test]
    fn test_circular_orbit_velocity() {
        let velocity = circular_orbit_velocity(Vector::new(100.0, 0.0), 400.0);

        // Tangential, magnitude sqrt(400 / 100)
        assert!(velocity.x.abs() < 1e-12);
        assert!((velocity.y - 2.0).abs() < 1e-12);
        assert_eq!(circular_orbit_velocity(Vector::ZERO, 1.0), Vector::ZERO);
    }

    #[test]
    fn test_generate_bodies_with_central_mass() {
        let config = ScenarioConfig {
            body_count: 25,
            ..ScenarioConfig::default()
        };
        let mut rng = SharedRng::from_seed(1);

        let bodies = generate_bodies(&mut rng, &config);

        assert_eq!(bodies.len(), 26);
        assert!(bodies[0].camera_focus);
        assert_eq!(bodies[0].mass, 2000.0);
        assert_eq!(bodies.iter().filter(|b| b.camera_focus).count(), 1);
        for body in &bodies[1..] {
            assert!(body.validate().is_ok());
            assert!((config.min_mass..=config.max_mass).contains(&body.mass));
        }
    }

    #[test]
    fn test_generate_bodies_is_deterministic() {
        let config = ScenarioConfig {
            central_mass: None,
            ..ScenarioConfig::default()
        };

        let first = generate_bodies(&mut SharedRng::from_seed(99), &config);
        let second = generate_bodies(&mut SharedRng::from_seed(99), &config);

        assert_eq!(first.len(), config.body_count);
        assert_eq!(first, second);
    }
}

//! Detection and coalescence of overlapping bodies
//!
//! Two bodies overlap when the distance between their centers is less than
//! the sum of their radii. An overlapping pair is replaced by a single body
//! that conserves the pair's mass exactly and its momentum up to floating
//! point rounding. This is an inelastic approximation: kinetic energy is not
//! conserved and nothing fragments.
//!
//! # Pass structure
//!
//! Pairs `(i, j)` with `i < j` are scanned in registry order. The first
//! overlapping pair is removed (the remaining bodies keep their relative
//! order), the merged body is appended to the end of the registry, and the
//! scan restarts from the beginning. Consumed bodies are gone from the
//! registry, so no body can take part in two merges, while the freshly
//! merged body may cascade into further merges in the same pass. Every merge
//! shrinks the registry by one, which bounds the pass.

use crate::physics::body::Body;
use crate::physics::math::{self, Scalar};
use bevy::log::{debug, trace};

/// Whether `a` and `b` overlap at the given mass multiplier
pub fn overlaps(a: &Body, b: &Body, mass_multiplier: Scalar) -> bool {
    math::distance(a.position, b.position)
        < a.radius(mass_multiplier) + b.radius(mass_multiplier)
}

/// Coalesces two bodies into one.
///
/// `a` is the body earlier in registry order. The merged body keeps the
/// trail of the heavier input, with ties going to `a`, and is focused if
/// either input was.
pub fn merge(a: Body, b: Body) -> Body {
    let mass = a.mass + b.mass;
    let ratio = a.mass / mass;

    let position = (a.position * a.mass + b.position * b.mass) / mass;
    let velocity = (a.velocity * a.mass + b.velocity * b.mass) / mass;
    let density = a.density * ratio + b.density * (1.0 - ratio);
    let camera_focus = a.camera_focus || b.camera_focus;
    let trail = if a.mass >= b.mass { a.trail } else { b.trail };

    Body {
        position,
        velocity,
        mass,
        density,
        trail,
        camera_focus,
    }
}

/// First overlapping pair `(i, j)`, `i < j`, in registry order
fn find_overlap(bodies: &[Body], mass_multiplier: Scalar) -> Option<(usize, usize)> {
    let radii: Vec<Scalar> = bodies
        .iter()
        .map(|body| body.radius(mass_multiplier))
        .collect();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let separation = math::distance(bodies[i].position, bodies[j].position);
            if separation < radii[i] + radii[j] {
                return Some((i, j));
            }
        }
    }

    None
}

/// Merges overlapping bodies until none overlap, returning how many merges
/// were performed.
pub fn resolve_collisions(bodies: &mut Vec<Body>, mass_multiplier: Scalar) -> usize {
    let mut merges = 0;

    while let Some((i, j)) = find_overlap(bodies, mass_multiplier) {
        // Remove the later index first so `i` stays valid
        let b = bodies.remove(j);
        let a = bodies.remove(i);

        trace!(
            "Merging bodies of mass {} and {} at ({:.3}, {:.3}) and ({:.3}, {:.3})",
            a.mass, b.mass, a.position.x, a.position.y, b.position.x, b.position.y
        );

        bodies.push(merge(a, b));
        merges += 1;
    }

    if merges > 0 {
        debug!(
            "Resolved {} collision(s), {} bodies remain",
            merges,
            bodies.len()
        );
    }

    merges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::BodyDescriptor;
    use crate::physics::math::Vector;

    const K: Scalar = 1.0;

    fn body(descriptor: BodyDescriptor) -> Body {
        Body::try_from(descriptor).unwrap()
    }

    #[test]
    fn test_overlap_threshold() {
        let a = body(BodyDescriptor::new(0.0, 0.0, 10.0, 1.0));
        let r = a.radius(K);

        let touching = body(BodyDescriptor::new(2.0 * r, 0.0, 10.0, 1.0));
        let inside = body(BodyDescriptor::new(2.0 * r * 0.99, 0.0, 10.0, 1.0));

        // Strict inequality: exactly touching is not an overlap
        assert!(!overlaps(&a, &touching, K));
        assert!(overlaps(&a, &inside, K));
        assert!(overlaps(&inside, &a, K));
    }

    #[test]
    fn test_merge_conserves_mass_and_momentum() {
        let a = body(BodyDescriptor::new(0.0, 0.0, 3.0, 1.0).with_velocity(1.0, 2.0));
        let b = body(BodyDescriptor::new(4.0, 1.0, 7.0, 5.0).with_velocity(-2.0, 0.5));
        let momentum_before = a.momentum() + b.momentum();

        let merged = merge(a, b);

        assert_eq!(merged.mass, 10.0);
        assert!((merged.momentum() - momentum_before).length() < 1e-12);
        assert!((merged.position - Vector::new(2.8, 0.7)).length() < 1e-12);
        // 1 * 0.3 + 5 * 0.7
        assert!((merged.density - 3.8).abs() < 1e-12);
    }

    #[test]
    fn test_merge_keeps_heavier_trail() {
        let mut a = body(BodyDescriptor::new(0.0, 0.0, 1.0, 1.0));
        let mut b = body(BodyDescriptor::new(0.1, 0.0, 2.0, 1.0));
        a.trail.record(Vector::new(-1.0, 0.0), 120.0);
        b.trail.record(Vector::new(5.0, 5.0), 120.0);
        b.trail.record(Vector::new(6.0, 6.0), 120.0);

        let merged = merge(a, b);

        assert_eq!(merged.trail.len(), 2);
        assert_eq!(merged.trail.latest(), Some(Vector::new(6.0, 6.0)));
    }

    #[test]
    fn test_merge_tie_prefers_first_trail() {
        let mut a = body(BodyDescriptor::new(0.0, 0.0, 2.0, 1.0));
        let mut b = body(BodyDescriptor::new(0.1, 0.0, 2.0, 1.0));
        a.trail.record(Vector::new(1.0, 1.0), 120.0);
        b.trail.record(Vector::new(2.0, 2.0), 120.0);

        let merged = merge(a, b);

        assert_eq!(merged.trail.latest(), Some(Vector::new(1.0, 1.0)));
    }

    #[test]
    fn test_merge_carries_focus() {
        let a = body(BodyDescriptor::new(0.0, 0.0, 1.0, 1.0));
        let b = body(BodyDescriptor::new(0.0, 0.0, 1.0, 1.0).with_focus());
        assert!(merge(a.clone(), b.clone()).camera_focus);
        assert!(merge(b, a.clone()).camera_focus);
        assert!(!merge(a.clone(), a).camera_focus);
    }

    #[test]
    fn test_resolve_merges_pair_and_appends() {
        let mut bodies = vec![
            body(BodyDescriptor::new(-1000.0, 0.0, 1.0, 1.0)),
            body(BodyDescriptor::new(0.0, 0.0, 10.0, 1.0)),
            body(BodyDescriptor::new(500.0, 0.0, 1.0, 1.0)),
            body(BodyDescriptor::new(0.5, 0.0, 10.0, 1.0)),
        ];

        let merges = resolve_collisions(&mut bodies, K);

        assert_eq!(merges, 1);
        assert_eq!(bodies.len(), 3);
        // Untouched bodies keep their relative order; the merge lands last
        assert_eq!(bodies[0].position, Vector::new(-1000.0, 0.0));
        assert_eq!(bodies[1].position, Vector::new(500.0, 0.0));
        assert_eq!(bodies[2].mass, 20.0);
    }

    #[test]
    fn test_resolve_cascades_within_one_pass() {
        // Three bodies stacked on one spot coalesce into one
        let mut bodies = vec![
            body(BodyDescriptor::new(0.0, 0.0, 5.0, 1.0)),
            body(BodyDescriptor::new(0.1, 0.0, 5.0, 1.0)),
            body(BodyDescriptor::new(0.2, 0.0, 5.0, 1.0)),
        ];

        let merges = resolve_collisions(&mut bodies, K);

        assert_eq!(merges, 2);
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].mass, 15.0);
    }

    #[test]
    fn test_resolve_without_overlap_is_noop() {
        let mut bodies = vec![
            body(BodyDescriptor::new(0.0, 0.0, 1.0, 1.0)),
            body(BodyDescriptor::new(100.0, 0.0, 1.0, 1.0)),
        ];
        let before = bodies.clone();

        assert_eq!(resolve_collisions(&mut bodies, K), 0);
        assert_eq!(bodies, before);

        let mut empty = Vec::new();
        assert_eq!(resolve_collisions(&mut empty, K), 0);
    }
}

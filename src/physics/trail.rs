//! Bounded position history for each body
//!
//! Trails are purely presentational: the physics never reads them. A trail
//! grows by one point per tick and sheds at most one point per tick, so a
//! shrinking bound is approached gradually rather than clamped.

use crate::physics::math::{Scalar, Vector};
use std::collections::VecDeque;

/// Hard upper bound on the number of points kept per trail
pub const MAX_TRAIL_POINTS: usize = 120;

/// Trail length scales with `radius / speed`, times this factor
pub const TRAIL_RADIUS_FACTOR: Scalar = 20.0;

/// Maximum trail length for a body of the given radius and speed.
///
/// A stationary body has no speed-based limit and caps at
/// [`MAX_TRAIL_POINTS`].
pub fn trail_bound(radius: Scalar, speed: Scalar) -> Scalar {
    let cap = MAX_TRAIL_POINTS as Scalar;
    if speed <= 0.0 {
        return cap;
    }
    cap.min(radius * TRAIL_RADIUS_FACTOR / speed)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Vector>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `position` as the newest point, then drops the oldest point
    /// once if the trail is longer than `bound`.
    pub fn record(&mut self, position: Vector, bound: Scalar) {
        self.points.push_back(position);

        if self.points.len() as Scalar > bound {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest
    pub fn points(&self) -> impl DoubleEndedIterator<Item = Vector> + '_ {
        self.points.iter().copied()
    }

    pub fn latest(&self) -> Option<Vector> {
        self.points.back().copied()
    }
}

impl FromIterator<Vector> for Trail {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_creation() {
        let trail = Trail::new();

        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
        assert_eq!(trail.latest(), None);
    }

    #[test]
    fn test_trail_record_keeps_newest_last() {
        let mut trail = Trail::new();
        let pos1 = Vector::new(0.0, 0.0);
        let pos2 = Vector::new(1.0, 0.0);

        trail.record(pos1, 120.0);
        trail.record(pos2, 120.0);

        let points: Vec<Vector> = trail.points().collect();
        assert_eq!(points, vec![pos1, pos2]);
        assert_eq!(trail.latest(), Some(pos2));
    }

    #[test]
    fn test_trail_drops_oldest_when_over_bound() {
        let mut trail = Trail::new();

        for i in 0..3 {
            trail.record(Vector::new(i as Scalar, 0.0), 3.0);
        }
        assert_eq!(trail.len(), 3);

        trail.record(Vector::new(3.0, 0.0), 3.0);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.points().next(), Some(Vector::new(1.0, 0.0)));
    }

    #[test]
    fn test_trail_sheds_one_point_per_record() {
        let mut trail: Trail = (0..10).map(|i| Vector::new(i as Scalar, 0.0)).collect();

        // Bound collapses to 2, but each record only removes one point
        trail.record(Vector::new(10.0, 0.0), 2.0);
        assert_eq!(trail.len(), 10);

        trail.record(Vector::new(11.0, 0.0), 2.0);
        assert_eq!(trail.len(), 10);
        assert_eq!(trail.points().next(), Some(Vector::new(2.0, 0.0)));
    }

    #[test]
    fn test_fractional_bound() {
        let mut trail = Trail::new();

        trail.record(Vector::ZERO, 1.5);
        assert_eq!(trail.len(), 1);

        trail.record(Vector::ONE, 1.5);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.latest(), Some(Vector::ONE));
    }

    #[test]
    fn test_trail_bound() {
        assert_eq!(trail_bound(1.0, 0.0), 120.0);
        assert_eq!(trail_bound(1.0, 0.1), 120.0);
        assert_eq!(trail_bound(2.0, 1.0), 40.0);
        assert!((trail_bound(3.0, 4.0) - 15.0).abs() < 1e-12);
    }
}

//! Simulated bodies and the shape callers use to create them

use crate::error::SpacetimeError;
use crate::physics::math::{self, Scalar, Vector};
use crate::physics::trail::Trail;
use serde::{Deserialize, Serialize};

/// Caller-supplied description of a new body.
///
/// Trails and per-tick scratch state are owned by the engine and are not
/// part of this shape.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub x: Scalar,
    pub y: Scalar,
    #[serde(default)]
    pub vel_x: Scalar,
    #[serde(default)]
    pub vel_y: Scalar,
    pub mass: Scalar,
    pub density: Scalar,
    #[serde(default)]
    pub camera_focus: bool,
}

impl BodyDescriptor {
    /// A body at rest at `(x, y)`
    pub fn new(x: Scalar, y: Scalar, mass: Scalar, density: Scalar) -> Self {
        Self {
            x,
            y,
            vel_x: 0.0,
            vel_y: 0.0,
            mass,
            density,
            camera_focus: false,
        }
    }

    pub fn with_velocity(mut self, vel_x: Scalar, vel_y: Scalar) -> Self {
        self.vel_x = vel_x;
        self.vel_y = vel_y;
        self
    }

    pub fn with_focus(mut self) -> Self {
        self.camera_focus = true;
        self
    }

    pub fn validate(&self) -> Result<(), SpacetimeError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SpacetimeError::InvalidBody {
                reason: "mass must be positive and finite",
            });
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(SpacetimeError::InvalidBody {
                reason: "density must be positive and finite",
            });
        }
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(SpacetimeError::InvalidBody {
                reason: "position must be finite",
            });
        }
        if !(self.vel_x.is_finite() && self.vel_y.is_finite()) {
            return Err(SpacetimeError::InvalidBody {
                reason: "velocity must be finite",
            });
        }
        Ok(())
    }
}

/// A point mass in the simulation
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub(crate) position: Vector,
    pub(crate) velocity: Vector,
    pub(crate) mass: Scalar,
    pub(crate) density: Scalar,
    pub(crate) trail: Trail,
    pub(crate) camera_focus: bool,
}

impl TryFrom<BodyDescriptor> for Body {
    type Error = SpacetimeError;

    fn try_from(descriptor: BodyDescriptor) -> Result<Self, Self::Error> {
        descriptor.validate()?;

        Ok(Self {
            position: Vector::new(descriptor.x, descriptor.y),
            velocity: Vector::new(descriptor.vel_x, descriptor.vel_y),
            mass: descriptor.mass,
            density: descriptor.density,
            trail: Trail::new(),
            camera_focus: descriptor.camera_focus,
        })
    }
}

impl Body {
    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    #[inline]
    pub fn density(&self) -> Scalar {
        self.density
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.camera_focus
    }

    #[inline]
    pub fn speed(&self) -> Scalar {
        math::speed(self.velocity)
    }

    /// Momentum vector, `mass * velocity`
    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    #[inline]
    pub fn momentum_magnitude(&self) -> Scalar {
        math::momentum_magnitude(self.velocity, self.mass)
    }

    #[inline]
    pub fn radius(&self, mass_multiplier: Scalar) -> Scalar {
        math::radius(self.mass, self.density, mass_multiplier)
    }
}

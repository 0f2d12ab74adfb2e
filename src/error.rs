//! Error types for the simulation engine

use crate::physics::math::Scalar;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SpacetimeError {
    /// A radius was needed before the mass multiplier was initialized
    MassMultiplierUnset,
    /// A body descriptor was rejected by `add_body`
    InvalidBody { reason: &'static str },
    /// A global parameter setter received an unusable value
    InvalidParameter { name: &'static str, value: Scalar },
    /// No integrator is registered under the requested name
    UnknownIntegrator { name: String, available: Vec<String> },
}

impl fmt::Display for SpacetimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacetimeError::MassMultiplierUnset => {
                write!(f, "Mass multiplier must be set before computing radii")
            }
            SpacetimeError::InvalidBody { reason } => write!(f, "Invalid body: {reason}"),
            SpacetimeError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
            SpacetimeError::UnknownIntegrator { name, available } => write!(
                f,
                "Unknown integrator: '{name}'. Available integrators: {}",
                available.join(", ")
            ),
        }
    }
}

impl std::error::Error for SpacetimeError {}

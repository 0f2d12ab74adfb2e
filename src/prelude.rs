//! Spacetime prelude module
//!
//! Re-exports the types most callers need, along with the Bevy prelude used
//! by the plugins.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::{PhysicsConfig, SimulationConfig};

// Internal re-exports - Engine
pub use crate::error::SpacetimeError;
pub use crate::physics::body::{Body, BodyDescriptor};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::spacetime::{Spacetime, SpacetimeStats};

// Internal re-exports - App wiring
pub use crate::events::SimulationCommand;
pub use crate::resources::{SharedRng, TickLimit};
pub use crate::states::AppState;

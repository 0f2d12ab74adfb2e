//! Commands callers send to the running simulation
//!
//! Commands are applied in `Update`, between fixed ticks, so the engine is
//! never mutated while a tick is in progress.

use crate::physics::body::BodyDescriptor;
use crate::physics::math::Scalar;
use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    AddBody(BodyDescriptor),
    Clear,
    /// Clear and repopulate from the scenario configuration
    Restart,
    CycleFocus,
    TogglePause,
    SetMassMultiplier(Scalar),
    SetTimeSpeed(Scalar),
    SetTickRate(Scalar),
    Quit,
}

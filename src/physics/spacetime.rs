//! The simulation engine: a registry of bodies plus the global parameters
//! that drive each tick.
//!
//! A tick runs three phases in order:
//!
//! 1. Collision merging, the only phase that changes registry membership.
//! 2. Force accumulation over the post-merge bodies, into tick-local scratch.
//! 3. Per body: record the pre-step position in its trail, then integrate
//!    velocity and position scaled by the time speed.
//!
//! The engine never schedules itself. Callers decide when to call
//! [`Spacetime::step`] and may read [`Spacetime::snapshot`] or mutate the
//! registry between ticks.

use crate::config::PhysicsConfig;
use crate::error::SpacetimeError;
use crate::physics::body::{Body, BodyDescriptor};
use crate::physics::integrators::{Integrator, IntegratorRegistry, SymplecticEuler};
use crate::physics::math::{Scalar, Vector};
use crate::physics::trail::trail_bound;
use crate::physics::{collisions, focus, gravity};
use bevy::prelude::*;

pub const DEFAULT_TICK_RATE: Scalar = 100.0;
pub const DEFAULT_TIME_SPEED: Scalar = 1.0;

#[derive(Resource, Debug, Clone)]
pub struct Spacetime {
    bodies: Vec<Body>,
    mass_multiplier: Option<Scalar>,
    tick_rate: Scalar,
    time_speed: Scalar,
    integrator: Box<dyn Integrator>,
    tick_count: u64,
}

/// Aggregate quantities of the registry at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacetimeStats {
    pub tick: u64,
    pub body_count: usize,
    pub total_mass: Scalar,
    pub momentum: Vector,
    /// Mass-weighted center, `None` for an empty registry
    pub barycenter: Option<Vector>,
}

impl Default for Spacetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Spacetime {
    /// An empty engine with the mass multiplier still unset
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            mass_multiplier: None,
            tick_rate: DEFAULT_TICK_RATE,
            time_speed: DEFAULT_TIME_SPEED,
            integrator: Box::new(SymplecticEuler),
            tick_count: 0,
        }
    }

    pub fn with_mass_multiplier(mass_multiplier: Scalar) -> Result<Self, SpacetimeError> {
        let mut spacetime = Self::new();
        spacetime.set_mass_multiplier(mass_multiplier)?;
        Ok(spacetime)
    }

    pub fn from_config(config: &PhysicsConfig) -> Result<Self, SpacetimeError> {
        let integrator = IntegratorRegistry::default().create(&config.integrator)?;

        let mut spacetime = Self::new().with_integrator(integrator);
        spacetime.set_mass_multiplier(config.mass_multiplier)?;
        spacetime.set_tick_rate(config.ticks_per_second)?;
        spacetime.set_time_speed(config.time_speed)?;

        Ok(spacetime)
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Appends a body to the registry.
    ///
    /// A focused descriptor takes focus away from whichever body held it.
    pub fn add_body(&mut self, descriptor: BodyDescriptor) -> Result<(), SpacetimeError> {
        let body = Body::try_from(descriptor)?;
        let focused = body.camera_focus;

        self.bodies.push(body);

        if focused {
            let last = self.bodies.len() - 1;
            focus::focus_only(&mut self.bodies, last);
        }

        Ok(())
    }

    /// Removes every body, and with them any focus
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Accepts finite values greater than zero.
    pub fn set_mass_multiplier(&mut self, value: Scalar) -> Result<(), SpacetimeError> {
        self.mass_multiplier = Some(positive("mass_multiplier", value)?);
        Ok(())
    }

    /// Ticks per second requested from the scheduler. The engine itself only
    /// reports it back. Accepts finite values greater than zero.
    pub fn set_tick_rate(&mut self, value: Scalar) -> Result<(), SpacetimeError> {
        self.tick_rate = positive("tick_rate", value)?;
        Ok(())
    }

    /// Simulated time per tick. Accepts finite values of zero or more; zero
    /// freezes motion while ticks, merges and trail updates keep running.
    pub fn set_time_speed(&mut self, value: Scalar) -> Result<(), SpacetimeError> {
        self.time_speed = non_negative("time_speed", value)?;
        Ok(())
    }

    pub fn mass_multiplier(&self) -> Option<Scalar> {
        self.mass_multiplier
    }

    pub fn tick_rate(&self) -> Scalar {
        self.tick_rate
    }

    pub fn time_speed(&self) -> Scalar {
        self.time_speed
    }

    pub fn integrator_name(&self) -> &'static str {
        self.integrator.name()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Current bodies in registry order
    pub fn snapshot(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn focused(&self) -> Option<&Body> {
        focus::focused_index(&self.bodies).map(|index| &self.bodies[index])
    }

    pub fn cycle_focus(&mut self) {
        focus::cycle_focus(&mut self.bodies);
    }

    pub fn radius_of(&self, body: &Body) -> Result<Scalar, SpacetimeError> {
        Ok(body.radius(self.require_mass_multiplier()?))
    }

    fn require_mass_multiplier(&self) -> Result<Scalar, SpacetimeError> {
        self.mass_multiplier
            .ok_or(SpacetimeError::MassMultiplierUnset)
    }

    /// Runs one tick: merge, accumulate forces, then record trails and
    /// integrate.
    ///
    /// An empty registry is a no-op. Otherwise the mass multiplier must be
    /// set; if it is not, nothing is changed.
    pub fn step(&mut self) -> Result<(), SpacetimeError> {
        if self.bodies.is_empty() {
            self.tick_count += 1;
            return Ok(());
        }

        let mass_multiplier = self.require_mass_multiplier()?;

        collisions::resolve_collisions(&mut self.bodies, mass_multiplier);

        let accelerations = gravity::accelerations(&self.bodies);
        let dt = self.time_speed;

        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            let bound = trail_bound(body.radius(mass_multiplier), body.speed());
            body.trail.record(body.position, bound);

            self.integrator
                .step(&mut body.position, &mut body.velocity, acceleration, dt);
        }

        self.tick_count += 1;
        Ok(())
    }

    pub fn stats(&self) -> SpacetimeStats {
        let (total_mass, weighted_position, momentum) = self.bodies.iter().fold(
            (0.0, Vector::ZERO, Vector::ZERO),
            |(mass, position, momentum), body| {
                (
                    mass + body.mass,
                    position + body.position * body.mass,
                    momentum + body.momentum(),
                )
            },
        );

        SpacetimeStats {
            tick: self.tick_count,
            body_count: self.bodies.len(),
            total_mass,
            momentum,
            barycenter: (total_mass > 0.0).then(|| weighted_position / total_mass),
        }
    }
}

fn positive(name: &'static str, value: Scalar) -> Result<Scalar, SpacetimeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SpacetimeError::InvalidParameter { name, value })
    }
}

fn non_negative(name: &'static str, value: Scalar) -> Result<Scalar, SpacetimeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SpacetimeError::InvalidParameter { name, value })
    }
}

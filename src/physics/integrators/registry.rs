//! Name lookup for integrators
//!
//! Configuration files and the command line refer to integrators by name.
//! Each integrator describes itself (canonical name and aliases), and the
//! registry indexes instances under every one of those names.

use super::Integrator;
use crate::error::SpacetimeError;
use std::collections::{BTreeSet, HashMap};

pub struct IntegratorRegistry {
    /// Maps names (canonical and aliases) to integrator instances
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register the integrators that ship with the engine.
    pub fn with_standard_integrators(mut self) -> Self {
        use super::{ExplicitEuler, SymplecticEuler};

        self.register_integrator(Box::new(SymplecticEuler));
        self.register_integrator(Box::new(ExplicitEuler));

        self
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register_integrator(integrator);
        self
    }

    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator>) {
        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }
        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, SpacetimeError> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| SpacetimeError::UnknownIntegrator {
                name: name.to_string(),
                available: self.list_available(),
            })
    }

    /// Canonical names, sorted
    pub fn list_available(&self) -> Vec<String> {
        self.integrators
            .values()
            .map(|integrator| integrator.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(alias, canonical name)` pairs, sorted by alias
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();

        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}

//! Test utilities for plugin testing

use crate::plugins::SimulationPlugin;
use crate::prelude::*;

/// Seeded configuration with `body_count` orbiting bodies around a central
/// mass. The tick rate is low enough that `FixedUpdate` never fires during a
/// test, so ticks only happen when a test runs them explicitly.
pub fn test_config(body_count: usize) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.physics.initial_seed = Some(42);
    config.physics.ticks_per_second = 1e-3;
    config.scenario.body_count = body_count;
    config
}

/// Creates a minimal app running the simulation plugin with `config`
pub fn create_test_app(config: SimulationConfig) -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::state::app::StatesPlugin,
        SimulationPlugin::with_config(config),
    ));

    app
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app(test_config(1));
        assert!(app.world().contains_resource::<Time>());
        assert!(app.world().contains_resource::<Spacetime>());
        assert!(app.world().contains_resource::<SimulationConfig>());
    }
}

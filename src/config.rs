use crate::physics::math::Scalar;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";
const ENVIRONMENT_PREFIX: &str = "SPACETIME";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub scenario: ScenarioConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Scale applied when deriving a body's radius from its mass and density
    pub mass_multiplier: Scalar,
    /// How often the scheduler runs a tick
    pub ticks_per_second: Scalar,
    /// Simulated time advanced per tick
    pub time_speed: Scalar,
    pub integrator: String,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass_multiplier: 1.0,
            ticks_per_second: 100.0,
            time_speed: 1.0,
            integrator: "symplectic_euler".into(),
            initial_seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub body_count: usize,
    /// Bodies are scattered uniformly over a disk of this radius
    pub spawn_radius: Scalar,
    pub min_mass: Scalar,
    pub max_mass: Scalar,
    pub min_density: Scalar,
    pub max_density: Scalar,
    pub max_initial_speed: Scalar,
    /// Mass of a focused body placed at rest at the origin, if any
    pub central_mass: Option<Scalar>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            body_count: 40,
            spawn_radius: 400.0,
            min_mass: 1.0,
            max_mass: 20.0,
            min_density: 0.5,
            max_density: 2.0,
            max_initial_speed: 0.5,
            central_mass: Some(2000.0),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Ticks between statistics log lines; zero disables them
    pub log_interval_ticks: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            log_interval_ticks: 100,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Location of the per-user configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spacetime")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration file layered with `SPACETIME__*`
    /// environment overrides, e.g. `SPACETIME__PHYSICS__TIME_SPEED=2`.
    pub fn load_from_user_config() -> Self {
        Self::load_layered(Self::user_config_path(), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENVIRONMENT_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn load_layered(path: Option<PathBuf>, environment: config::Environment) -> Self {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Looking for user configuration at {}", path.display());
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let layered = builder
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize::<Self>());

        match layered {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load user configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();

        assert_eq!(config.physics.mass_multiplier, 1.0);
        assert_eq!(config.physics.ticks_per_second, 100.0);
        assert_eq!(config.physics.time_speed, 1.0);
        assert_eq!(config.physics.integrator, "symplectic_euler");
        assert_eq!(config.diagnostics.log_interval_ticks, 100);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SimulationConfig = toml::from_str(
            r#"
            [physics]
            time_speed = 2.5
            initial_seed = 7

            [scenario]
            body_count = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.physics.time_speed, 2.5);
        assert_eq!(config.physics.initial_seed, Some(7));
        assert_eq!(config.physics.mass_multiplier, 1.0);
        assert_eq!(config.scenario.body_count, 3);
        assert_eq!(config.scenario.spawn_radius, 400.0);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!(
            "spacetime-config-test-{}.toml",
            std::process::id()
        ));
        let path = path.to_string_lossy().to_string();

        let mut config = SimulationConfig::default();
        config.physics.mass_multiplier = 3.0;
        config.scenario.central_mass = Some(500.0);
        config.physics.initial_seed = Some(42);
        config.save(&path).unwrap();

        let reloaded = SimulationConfig::load_or_default(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reloaded, config);
    }

    fn environment_with(vars: &[(&str, &str)]) -> config::Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SimulationConfig::environment().source(Some(source))
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = std::env::temp_dir().join(format!(
            "spacetime-layered-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[physics]\ntime_speed = 4.0\nmass_multiplier = 2.0\n\n[scenario]\nbody_count = 3\n",
        )
        .unwrap();

        let config = SimulationConfig::load_layered(
            Some(path.clone()),
            environment_with(&[
                ("SPACETIME__PHYSICS__TIME_SPEED", "2.5"),
                ("SPACETIME__SCENARIO__BODY_COUNT", "7"),
                ("OTHER__PHYSICS__TICKS_PER_SECOND", "5"),
            ]),
        );
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.physics.time_speed, 2.5);
        assert_eq!(config.scenario.body_count, 7);
        assert_eq!(config.physics.mass_multiplier, 2.0);
        assert_eq!(config.physics.ticks_per_second, 100.0);
    }

    #[test]
    fn test_missing_user_file_uses_environment_only() {
        let config = SimulationConfig::load_layered(
            Some(PathBuf::from("/nonexistent/spacetime/config.toml")),
            environment_with(&[("SPACETIME__PHYSICS__INTEGRATOR", "explicit_euler")]),
        );

        assert_eq!(config.physics.integrator, "explicit_euler");
        assert_eq!(config.scenario, ScenarioConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = SimulationConfig::load_or_default("/nonexistent/spacetime.toml");
        assert_eq!(config, SimulationConfig::default());
    }
}

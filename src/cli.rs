//! Command line interface for Spacetime

use clap::Parser;
use std::fmt;

use spacetime::config::SimulationConfig;
use spacetime::integrators::IntegratorRegistry;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration values could not be applied
    ConfigLoad(String),
    /// Invalid integrator name provided
    InvalidIntegrator(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidIntegrator(msg) => write!(f, "Invalid integrator: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Spacetime - headless 2D N-body gravity simulation
#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Number of bodies to spawn (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub bodies: Option<usize>,

    /// Random seed for body generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Scale applied when deriving radii from mass and density
    #[arg(short = 'm', long, value_name = "VALUE")]
    pub mass_multiplier: Option<f64>,

    /// Simulated time advanced per tick; 0 freezes motion
    #[arg(short = 't', long, value_name = "VALUE")]
    pub time_speed: Option<f64>,

    /// Ticks run per second of wall time
    #[arg(long, value_name = "HZ")]
    pub ticks_per_second: Option<f64>,

    /// Integrator type (e.g., symplectic_euler, explicit_euler)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Exit after this many ticks
    #[arg(long, value_name = "COUNT")]
    pub ticks: Option<u64>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,
}

/// Handles the --list-integrators flag by printing available integrators
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::default();
    println!("Available integrators:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

fn require_positive(name: &str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CliError::ConfigLoad(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CliError::ConfigLoad(format!(
            "{name} must not be negative, got {value}"
        )))
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(body_count) = args.bodies {
        println!("Overriding body count to: {body_count}");
        config.scenario.body_count = body_count;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if let Some(mass_multiplier) = args.mass_multiplier {
        config.physics.mass_multiplier = require_positive("mass multiplier", mass_multiplier)?;
        println!("Overriding mass multiplier to: {mass_multiplier}");
    }

    if let Some(time_speed) = args.time_speed {
        config.physics.time_speed = require_non_negative("time speed", time_speed)?;
        println!("Overriding time speed to: {time_speed}");
    }

    if let Some(ticks_per_second) = args.ticks_per_second {
        config.physics.ticks_per_second = require_positive("ticks per second", ticks_per_second)?;
        println!("Overriding ticks per second to: {ticks_per_second}");
    }

    if let Some(integrator_type) = &args.integrator {
        // Validate integrator name against registry
        IntegratorRegistry::default()
            .create(integrator_type)
            .map_err(|err| CliError::InvalidIntegrator(err.to_string()))?;

        println!("Using integrator: {integrator_type}");
        config.physics.integrator = integrator_type.clone();
    }

    Ok(config)
}

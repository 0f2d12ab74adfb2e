//! Simulation plugin
//!
//! Owns one [`Spacetime`] as a resource and plays the role of its scheduler:
//! `FixedUpdate` runs at the configured tick rate and advances the engine
//! once per fixed step while the app is running. Commands arrive as
//! [`SimulationCommand`] events and are applied in `Update`.

use crate::prelude::*;
use crate::scenario;
use bevy::state::app::StatesPlugin;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Commands,
    Tick,
    TickLimit,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
    start_paused: bool,
    tick_limit: Option<u64>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self {
            config: None,
            start_paused: false,
            tick_limit: None,
        }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new()
        }
    }

    pub fn paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }

    /// Exit the app once this many ticks have run
    pub fn with_tick_limit(mut self, tick_limit: Option<u64>) -> Self {
        self.tick_limit = tick_limit;
        self
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let spacetime = Spacetime::from_config(&config.physics).unwrap_or_else(|e| {
            warn!("Invalid physics configuration: {}. Falling back to defaults", e);
            Spacetime::from_config(&PhysicsConfig::default()).unwrap_or_default()
        });

        app.insert_resource(Time::<Fixed>::from_hz(spacetime.tick_rate()));
        app.insert_resource(spacetime);
        app.insert_resource(SharedRng::from_optional_seed(config.physics.initial_seed));
        app.insert_resource(TickLimit(self.tick_limit));
        app.insert_resource(config);

        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        if self.start_paused {
            app.insert_state(AppState::Paused);
        } else {
            app.init_state::<AppState>();
        }

        app.add_event::<SimulationCommand>();

        app.configure_sets(
            FixedUpdate,
            (SimulationSet::Tick, SimulationSet::TickLimit).chain(),
        );

        app.add_systems(Startup, spawn_scenario_bodies);
        app.add_systems(
            Update,
            (
                handle_spacetime_commands,
                handle_toggle_pause_simulation_event,
            )
                .in_set(SimulationSet::Commands),
        );
        app.add_systems(
            FixedUpdate,
            (
                advance_spacetime
                    .in_set(SimulationSet::Tick)
                    .run_if(in_state(AppState::Running)),
                enforce_tick_limit.in_set(SimulationSet::TickLimit),
            ),
        );
    }
}

fn populate(spacetime: &mut Spacetime, rng: &mut SharedRng, config: &SimulationConfig) {
    let mut rejected = 0;

    for descriptor in scenario::generate_bodies(rng, &config.scenario) {
        if let Err(e) = spacetime.add_body(descriptor) {
            debug!("Skipping generated body: {}", e);
            rejected += 1;
        }
    }

    if rejected > 0 {
        warn!("{} generated bodies were rejected", rejected);
    }
    info!("Spawned {} bodies", spacetime.len());
}

pub fn spawn_scenario_bodies(
    mut spacetime: ResMut<Spacetime>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
) {
    populate(&mut spacetime, &mut rng, &config);
}

/// Runs one engine tick
pub fn advance_spacetime(mut spacetime: ResMut<Spacetime>) {
    if let Err(e) = spacetime.step() {
        warn_once!("Simulation tick failed: {}", e);
    }
}

pub fn enforce_tick_limit(
    spacetime: Res<Spacetime>,
    tick_limit: Res<TickLimit>,
    mut exit: EventWriter<AppExit>,
) {
    if tick_limit.is_reached(spacetime.tick_count()) {
        info!("Reached tick limit of {}", spacetime.tick_count());
        exit.write(AppExit::Success);
    }
}

pub fn handle_spacetime_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut spacetime: ResMut<Spacetime>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut rng: ResMut<SharedRng>,
    config: Res<SimulationConfig>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands_reader.read() {
        let result = match *command {
            SimulationCommand::AddBody(descriptor) => spacetime.add_body(descriptor),
            SimulationCommand::Clear => {
                spacetime.clear();
                Ok(())
            }
            SimulationCommand::Restart => {
                spacetime.clear();
                rng.reseed(config.physics.initial_seed);
                populate(&mut spacetime, &mut rng, &config);
                Ok(())
            }
            SimulationCommand::CycleFocus => {
                spacetime.cycle_focus();
                Ok(())
            }
            SimulationCommand::SetMassMultiplier(value) => spacetime.set_mass_multiplier(value),
            SimulationCommand::SetTimeSpeed(value) => spacetime.set_time_speed(value),
            SimulationCommand::SetTickRate(value) => spacetime
                .set_tick_rate(value)
                .map(|()| fixed_time.set_timestep_hz(spacetime.tick_rate())),
            SimulationCommand::Quit => {
                exit.write(AppExit::Success);
                Ok(())
            }
            SimulationCommand::TogglePause => Ok(()),
        };

        if let Err(e) = result {
            warn!("Ignoring {:?}: {}", command, e);
        }
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        match current_state.get() {
            AppState::Running => next_state.set(AppState::Paused),
            AppState::Paused => next_state.set(AppState::Running),
        }
    }
}

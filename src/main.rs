mod cli;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use clap::Parser;
use spacetime::prelude::*;
use spacetime::{SimulationDiagnosticsPlugin, SimulationPlugin};
use std::time::Duration;

use cli::{Args, handle_list_integrators, load_and_apply_config};

/// Frame loop cadence of the headless runner; fixed ticks catch up within it
const FRAME_INTERVAL: Duration = Duration::from_millis(4);

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_integrators {
        handle_list_integrators();
        return AppExit::Success;
    }

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_INTERVAL)),
        LogPlugin {
            level: log_level,
            ..default()
        },
        StatesPlugin,
        SimulationPlugin::with_config(config)
            .paused(args.paused)
            .with_tick_limit(args.ticks),
        SimulationDiagnosticsPlugin::default(),
    ));

    app.run()
}

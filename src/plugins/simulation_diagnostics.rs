//! Simulation diagnostics module.
//!
//! Records engine-level measurements after every fixed tick and writes a
//! summary line to the log at a configurable tick interval:
//!
//! - **Body count**: how many bodies remain after merging
//! - **Total mass**: conserved by merges, so it should never move
//! - **Momentum**: magnitude of the summed momentum vector
//! - **Barycenter**: mass-weighted center of the registry
//!
//! # Usage
//!
//! ```rust,ignore
//! app.add_plugins(SimulationDiagnosticsPlugin::default());
//! ```

use crate::prelude::*;
use bevy::diagnostic::DEFAULT_MAX_HISTORY_LENGTH;
use bevy::diagnostic::Diagnostic;
use bevy::diagnostic::DiagnosticPath;
use bevy::diagnostic::Diagnostics;
use bevy::diagnostic::RegisterDiagnostic;

#[derive(Resource, Default, Debug)]
pub struct SimulationDiagnosticsState {
    last_logged_tick: Option<u64>,
}

impl SimulationDiagnosticsState {
    /// Whether a summary is due at `tick`; an interval of zero never logs
    fn should_log(&self, tick: u64, interval: u64) -> bool {
        if interval == 0 {
            return false;
        }
        match self.last_logged_tick {
            Some(last) => tick >= last + interval,
            None => true,
        }
    }
}

pub struct SimulationDiagnosticsPlugin {
    max_history_length: usize,
    smoothing_factor: f64,
}

impl Default for SimulationDiagnosticsPlugin {
    fn default() -> Self {
        Self {
            max_history_length: DEFAULT_MAX_HISTORY_LENGTH,
            smoothing_factor: 0.0,
        }
    }
}

impl SimulationDiagnosticsPlugin {
    pub const BODY_COUNT_PATH: DiagnosticPath = DiagnosticPath::const_new("spacetime/body_count");
    pub const TOTAL_MASS_PATH: DiagnosticPath = DiagnosticPath::const_new("spacetime/total_mass");
    pub const MOMENTUM_PATH: DiagnosticPath = DiagnosticPath::const_new("spacetime/momentum");

    const DIAGNOSTIC_PATHS: &'static [DiagnosticPath] = &[
        Self::BODY_COUNT_PATH,
        Self::TOTAL_MASS_PATH,
        Self::MOMENTUM_PATH,
    ];

    fn register_diagnostics(&self, app: &mut App) {
        for path in Self::DIAGNOSTIC_PATHS {
            app.register_diagnostic(
                Diagnostic::new(path.clone())
                    .with_max_history_length(self.max_history_length)
                    .with_smoothing_factor(self.smoothing_factor),
            );
        }
    }

    fn update_spacetime_diagnostics(spacetime: Res<Spacetime>, mut diagnostics: Diagnostics) {
        let stats = spacetime.stats();

        diagnostics.add_measurement(&Self::BODY_COUNT_PATH, || stats.body_count as f64);
        diagnostics.add_measurement(&Self::TOTAL_MASS_PATH, || stats.total_mass);
        diagnostics.add_measurement(&Self::MOMENTUM_PATH, || stats.momentum.length());
    }

    fn log_spacetime_stats(
        spacetime: Res<Spacetime>,
        config: Res<SimulationConfig>,
        mut state: ResMut<SimulationDiagnosticsState>,
    ) {
        let stats = spacetime.stats();
        if !state.should_log(stats.tick, config.diagnostics.log_interval_ticks) {
            return;
        }
        state.last_logged_tick = Some(stats.tick);

        let focused = spacetime
            .focused()
            .map(|body| format!("({:.2}, {:.2})", body.position().x, body.position().y))
            .unwrap_or_else(|| "none".to_string());
        let barycenter = stats
            .barycenter
            .map(|center| format!("({:.2}, {:.2})", center.x, center.y))
            .unwrap_or_else(|| "none".to_string());

        info!(
            "tick {}: {} bodies, total mass {:.3}, momentum ({:.4}, {:.4}), barycenter {}, focus {}",
            stats.tick,
            stats.body_count,
            stats.total_mass,
            stats.momentum.x,
            stats.momentum.y,
            barycenter,
            focused
        );
    }
}

impl Plugin for SimulationDiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationDiagnosticsState>();

        self.register_diagnostics(app);

        app.add_systems(
            FixedPostUpdate,
            (
                Self::update_spacetime_diagnostics,
                Self::log_spacetime_stats,
            )
                .run_if(in_state(AppState::Running)),
        );
    }
}

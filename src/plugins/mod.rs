pub mod simulation;
pub mod simulation_diagnostics;

pub use simulation::SimulationPlugin;
pub use simulation_diagnostics::SimulationDiagnosticsPlugin;

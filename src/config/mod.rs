mod execution_mode;
mod simulation_config;

pub use execution_mode::ExecutionMode;
pub use simulation_config::SimulationConfig;

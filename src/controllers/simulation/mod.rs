pub mod simulator;
pub mod synthetic_load;

pub use simulator::{SimulationConfig, SimulationError, SimulationSummary, simulate, simulate_sweep};
pub use synthetic_load::{SyntheticLoad, SyntheticLoadError};

mod config;
mod ports;
mod scheduler;
mod simulation;

pub use config::{ConfigError, SimulationConfig, DEFAULT_CELL_SIZE, DEFAULT_DENSITY};
pub use ports::{GridStore, Presenter};
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler, MAX_RATE, MIN_RATE};
pub use simulation::Simulation;

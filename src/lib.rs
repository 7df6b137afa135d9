// Domain layer - grid and Life rule
pub mod domain;

// Application layer - simulation controller, scheduling, config
pub mod application;

// Infrastructure layer - snapshots, UI, rendering, input
pub mod persistence;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError};
pub use application::{FrameHandle, FrameQueue, FrameScheduler, GridStore, Presenter, Simulation, SimulationConfig};
pub use persistence::{FileStore, MemoryStore, SnapshotStore};

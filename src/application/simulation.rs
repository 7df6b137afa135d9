use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::SimulationConfig;
use super::ports::{GridStore, Presenter};
use super::scheduler::{FrameHandle, FrameScheduler};
use crate::domain::Grid;

/// Simulation owns the current grid and drives the run/pause loop.
/// Every change is pushed to the presenter and the store.
pub struct Simulation<S, G, P> {
    grid: Grid,
    running: bool,
    /// Present only while running
    pending: Option<FrameHandle>,
    generation: u64,
    density: f64,
    parallel_threshold: usize,
    rng: StdRng,
    scheduler: S,
    store: G,
    presenter: P,
}

impl<S: FrameScheduler, G: GridStore, P: Presenter> Simulation<S, G, P> {
    /// Start paused with the stored grid when it fits `rows x cols`,
    /// otherwise with an all-dead grid.
    pub fn new(config: &SimulationConfig, scheduler: S, store: G, presenter: P) -> Self {
        let (rows, cols) = (config.rows, config.cols);
        let grid = match store.load() {
            Some(saved) if saved.dimensions() == (rows, cols) => {
                info!("Restored {rows}x{cols} grid with {} live cells", saved.population());
                saved
            }
            Some(saved) => {
                let (saved_rows, saved_cols) = saved.dimensions();
                warn!(
                    "Discarding stored {saved_rows}x{saved_cols} grid, configured for {rows}x{cols}"
                );
                Grid::new(rows, cols)
            }
            None => Grid::new(rows, cols),
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut sim = Self {
            grid,
            running: false,
            pending: None,
            generation: 0,
            density: config.density,
            parallel_threshold: config.parallel_threshold,
            rng,
            scheduler,
            store,
            presenter,
        };
        sim.presenter.render(&sim.grid);
        sim
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Generations computed since the last randomize, clear or load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn store(&self) -> &G {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Flip one cell. Out-of-range coordinates are ignored.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        if self.grid.toggle(x, y).is_none() {
            debug!("Ignoring toggle outside the grid at ({x}, {y})");
            return false;
        }
        self.publish();
        true
    }

    /// Reseed with the configured density
    pub fn randomize(&mut self) {
        self.randomize_with_density(self.density);
    }

    pub fn randomize_with_density(&mut self, density: f64) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::random(rows, cols, density, &mut self.rng);
        self.generation = 0;
        self.publish();
    }

    pub fn clear(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::new(rows, cols);
        self.generation = 0;
        self.publish();
    }

    /// Advance one generation. Works whether running or paused.
    pub fn step(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = if rows * cols >= self.parallel_threshold {
            self.grid.next_generation_parallel()
        } else {
            self.grid.next_generation()
        };
        self.generation += 1;
        debug!(
            "Generation {} has {} live cells",
            self.generation,
            self.grid.population()
        );
        self.publish();
    }

    /// Begin the run loop. The first generation is computed immediately.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        info!("Simulation running from generation {}", self.generation);
        self.run_frame();
    }

    /// Pause and withdraw the pending frame so no stray step fires
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.running {
            self.running = false;
            info!("Simulation paused at generation {}", self.generation);
        }
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Frame callback from the scheduler. Only the currently pending handle
    /// advances the loop; anything else is stale and ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if !self.running || self.pending != Some(handle) {
            debug!("Ignoring stale frame {handle:?}");
            return;
        }
        self.pending = None;
        self.run_frame();
    }

    fn run_frame(&mut self) {
        self.step();
        self.pending = Some(self.scheduler.schedule_next());
    }

    fn publish(&mut self) {
        self.presenter.render(&self.grid);
        self.store.save(&self.grid);
    }
}

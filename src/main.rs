use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use std::path::PathBuf;
use torus_life::{
    FileStore, FrameQueue, Simulation, SimulationConfig, SnapshotStore,
    input, rendering::{self, CellCanvas, PanelInfo}, ui,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Conway's Game of Life on a torus", long_about = None)]
struct Args {
    /// TOML config file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Cell edge length in pixels; keeps the surface size and re-derives
    /// rows/cols unless those are given too
    #[arg(long)]
    cell_size: Option<f32>,

    /// Share of cells alive after randomize, 0.0 to 1.0
    #[arg(long)]
    density: Option<f64>,

    /// Generations per second while running (default: one per frame)
    #[arg(long)]
    speed: Option<f32>,

    /// Seed for reproducible randomize
    #[arg(long)]
    seed: Option<u64>,

    /// Key/value file holding the saved grid
    #[arg(long)]
    store: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        // Cell size first so explicit --rows/--cols still win
        if let Some(cell_size) = self.cell_size {
            config = config.with_cell_size(cell_size);
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if self.speed.is_some() {
            config.generations_per_second = self.speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(store) = self.store {
            config.store_path = store;
        }
        Ok(config.validate()?)
    }
}

fn window_conf(config: &SimulationConfig) -> Conf {
    let (width, height) = config.surface_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (width + ui::PANEL_WIDTH) as i32,
        window_height: height.max(ui::MIN_WINDOW_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(config: SimulationConfig, store: SnapshotStore<FileStore>) {
    let canvas = CellCanvas::new(config.rows, config.cols, config.cell_size);
    let frames = FrameQueue::throttled(config.generations_per_second);
    let mut sim = Simulation::new(&config, frames, store, canvas);

    let (surface_width, _) = config.surface_size();
    let buttons = ui::create_buttons(surface_width);

    loop {
        let mouse_pos = mouse_position();

        if let Some(command) = input::clicked_command(&buttons, mouse_pos) {
            command.apply(&mut sim);
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some((x, y)) = sim.presenter().cell_at(mouse_pos) {
                sim.toggle_cell(x, y);
            }
        }
        for command in input::keyboard_commands() {
            command.apply(&mut sim);
        }

        // Release due frame callbacks back into the simulation
        let due = sim.scheduler_mut().advance(get_frame_time());
        for handle in due {
            sim.on_frame(handle);
        }

        clear_background(Color::from_rgba(30, 30, 30, 255));
        sim.presenter().draw();
        rendering::draw_controls(&PanelInfo::from_simulation(&sim), &buttons, surface_width, mouse_pos);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    let backend = FileStore::open(&config.store_path);
    log::info!(
        "Starting {}x{} grid, snapshots in {}",
        config.rows,
        config.cols,
        backend.path().display()
    );

    macroquad::Window::from_config(window_conf(&config), run(config, SnapshotStore::new(backend)));
    Ok(())
}

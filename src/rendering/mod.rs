use macroquad::prelude::*;

use crate::application::{FrameQueue, GridStore, Presenter, Simulation};
use crate::domain::Grid;
use crate::input::pointer_to_cell;
use crate::ui::{self, Button, PANEL_WIDTH};

/// Presenter that keeps the alive squares of the latest grid and paints
/// them onto the macroquad window every frame.
pub struct CellCanvas {
    origin: (f32, f32),
    cell_size: f32,
    rows: usize,
    cols: usize,
    /// Top-left pixel of every alive cell
    squares: Vec<(f32, f32)>,
}

impl CellCanvas {
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Self {
        Self {
            origin: (0.0, 0.0),
            cell_size,
            rows,
            cols,
            squares: Vec::new(),
        }
    }

    /// Pixel size of the surface
    pub fn size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }

    pub fn squares(&self) -> &[(f32, f32)] {
        &self.squares
    }

    /// Cell under a pointer position, if it lands on the surface
    pub fn cell_at(&self, pointer: (f32, f32)) -> Option<(usize, usize)> {
        pointer_to_cell(pointer, self.origin, self.cell_size, self.rows, self.cols)
    }

    /// Paint the surface background and every alive cell.
    /// Cells leave a one pixel gap so neighbors stay distinguishable.
    pub fn draw(&self) {
        let (width, height) = self.size();
        draw_rectangle(self.origin.0, self.origin.1, width, height, WHITE);

        let side = (self.cell_size - 1.0).max(1.0);
        for &(x, y) in &self.squares {
            draw_rectangle(x, y, side, side, BLACK);
        }
    }
}

impl Presenter for CellCanvas {
    fn render(&mut self, grid: &Grid) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        let ((ox, oy), size) = (self.origin, self.cell_size);
        self.squares.clear();
        self.squares.extend(
            grid.alive_cells()
                .map(|(x, y)| (ox + x as f32 * size, oy + y as f32 * size)),
        );
    }
}

/// Numbers shown in the side panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelInfo {
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub rows: usize,
    pub cols: usize,
    pub rate: Option<f32>,
}

impl PanelInfo {
    pub fn from_simulation<G: GridStore, P: Presenter>(
        sim: &Simulation<FrameQueue, G, P>,
    ) -> Self {
        let (rows, cols) = sim.grid().dimensions();
        Self {
            generation: sim.generation(),
            population: sim.population(),
            running: sim.is_running(),
            rows,
            cols,
            rate: sim.scheduler().rate(),
        }
    }

    pub fn speed_label(&self) -> String {
        match self.rate {
            Some(rate) => format!("{rate:.0} gen/s"),
            None => "every frame".to_owned(),
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and status
pub fn draw_controls(info: &PanelInfo, buttons: &[Button], surface_width: f32, mouse_pos: (f32, f32)) {
    let px = ui::panel_x(surface_width);
    draw_rectangle(
        surface_width,
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let top = ui::buttons_bottom() + 20.0;
    let status_color = if info.running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        ("Status:".to_owned(), 0.0, 16.0, WHITE),
        (
            if info.running { "Running" } else { "Paused" }.to_owned(),
            20.0,
            16.0,
            status_color,
        ),
        ("Generation:".to_owned(), 50.0, 16.0, WHITE),
        (info.generation.to_string(), 70.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Population:".to_owned(), 100.0, 16.0, WHITE),
        (info.population.to_string(), 120.0, 16.0, LIGHTGRAY),
        ("Speed:".to_owned(), 150.0, 16.0, WHITE),
        (info.speed_label(), 170.0, 14.0, LIGHTGRAY),
        (format!("Grid: {}x{}", info.cols, info.rows), 200.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, dy, size, color)| {
        draw_text_label(text, px, top + dy, *size, *color);
    });

    let help = ["Click: toggle cell", "Space: start/stop", "N: step", "R: random  C: clear", "Up/Down: speed"];
    help.iter().enumerate().for_each(|(i, text)| {
        draw_text_label(text, px, top + 230.0 + i as f32 * 14.0, 12.0, GRAY);
    });
}

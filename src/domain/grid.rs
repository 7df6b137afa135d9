use super::Cell;
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

/// Reasons a set of rows cannot form a grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("cell ({x}, {y}) holds {value}, expected 0 or 1")]
    InvalidCell { x: usize, y: usize, value: u8 },
}

/// Grid is the fixed-size toroidal Life field.
/// `x` indexes columns and `y` indexes rows; storage is row-major.
/// Generation steps are pure and return a new grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Fresh grid where every cell is alive with probability `density`.
    /// Densities outside `[0, 1]` are clamped; NaN counts as 0.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let cells = (0..rows * cols)
            .map(|_| {
                if rng.random_bool(density) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid from row-major 0/1 values.
    /// Rows must be non-empty and all the same length.
    pub fn from_bits(bits: &[Vec<u8>]) -> Result<Self, GridError> {
        let rows = bits.len();
        let cols = bits.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (y, row) in bits.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::from_bit(value).ok_or(GridError::InvalidCell { x, y, value })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Row-major 0/1 values, the inverse of [`Grid::from_bits`]
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Returns false when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Flip one cell in place, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// Expects `x < cols` and `y < rows`.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside {}x{}", self.cols, self.rows);
        let (w, h) = (self.cols, self.rows);

        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                // Toroidal wrapping
                let nx = (x + w).wrapping_add_signed(dx) % w;
                let ny = (y + h).wrapping_add_signed(dy) % h;
                self.cells[self.get_index(nx, ny)].as_bit()
            })
            .sum()
    }

    /// Next state of the cell at a flat index, read from this generation only
    fn next_cell(&self, idx: usize) -> Cell {
        let (x, y) = (idx % self.cols, idx / self.cols);
        self.cells[idx].evolve(self.neighbor_count(x, y))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel evolution using rayon for large grids.
    /// Produces exactly the same grid as [`Grid::next_generation`].
    pub fn next_generation_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.cols, idx / self.cols, cell))
    }

    /// Positions of alive cells, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("cell size must be a positive number of pixels (got {0})")]
    CellSize(f32),
    #[error("density must lie in [0, 1] (got {0})")]
    Density(f64),
    #[error("generations per second must be positive (got {0})")]
    Rate(f32),
}

/// Everything the host needs to build a simulation.
/// Missing keys in a config file fall back to [`SimulationConfig::default`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    /// Probability that a cell starts alive on randomize
    pub density: f64,
    /// Throttle for the run loop; `None` steps once per frame
    pub generations_per_second: Option<f32>,
    pub seed: Option<u64>,
    /// Key/value file holding the latest grid snapshot
    pub store_path: PathBuf,
    /// Grids with at least this many cells evolve on the rayon pool
    pub parallel_threshold: usize,
}

pub const DEFAULT_CELL_SIZE: f32 = 10.0;
pub const DEFAULT_DENSITY: f64 = 0.2;

impl Default for SimulationConfig {
    fn default() -> Self {
        // 800x600 surface with 10px cells
        Self::from_surface(800.0, 600.0, DEFAULT_CELL_SIZE)
    }
}

impl SimulationConfig {
    /// Derive rows and columns from a pixel surface, rounding down
    pub fn from_surface(width: f32, height: f32, cell_size: f32) -> Self {
        let fit = |px: f32| (px / cell_size).floor().max(0.0) as usize;
        Self {
            rows: fit(height),
            cols: fit(width),
            cell_size,
            density: DEFAULT_DENSITY,
            generations_per_second: None,
            seed: None,
            store_path: PathBuf::from("life_store.json"),
            parallel_threshold: 250_000,
        }
    }

    /// Change the cell size while keeping the pixel surface, so rows and
    /// columns are re-derived. Invalid sizes are stored as given for
    /// [`SimulationConfig::validate`] to report.
    pub fn with_cell_size(self, cell_size: f32) -> Self {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Self { cell_size, ..self };
        }
        let (width, height) = self.surface_size();
        let surface = Self::from_surface(width, height, cell_size);
        Self {
            rows: surface.rows,
            cols: surface.cols,
            cell_size,
            ..self
        }
    }

    /// Read a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if let Some(rate) = self.generations_per_second {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(ConfigError::Rate(rate));
            }
        }
        Ok(self)
    }

    /// Pixel size of the drawing surface
    pub fn surface_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_page_surface() {
        let config = SimulationConfig::default();
        assert_eq!((config.rows, config.cols), (60, 80));
        assert_eq!(config.surface_size(), (800.0, 600.0));
        assert_eq!(config.density, 0.2);
        assert!(config.generations_per_second.is_none());
    }

    #[test]
    fn test_from_surface_rounds_down() {
        let config = SimulationConfig::from_surface(805.0, 599.0, 10.0);
        assert_eq!((config.rows, config.cols), (59, 80));
    }

    #[test]
    fn test_with_cell_size_keeps_surface() {
        let config = SimulationConfig {
            seed: Some(4),
            ..SimulationConfig::default()
        }
        .with_cell_size(20.0);
        assert_eq!((config.rows, config.cols), (30, 40));
        assert_eq!(config.surface_size(), (800.0, 600.0));
        assert_eq!(config.seed, Some(4));

        let bad = SimulationConfig::default().with_cell_size(0.0);
        assert!(matches!(bad.validate(), Err(ConfigError::CellSize(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SimulationConfig = toml::from_str("rows = 12\ncols = 20\nseed = 9").unwrap();
        assert_eq!((config.rows, config.cols), (12, 20));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = SimulationConfig::default();
        let cases = [
            SimulationConfig { rows: 0, ..base.clone() },
            SimulationConfig { cell_size: 0.0, ..base.clone() },
            SimulationConfig { density: 1.5, ..base.clone() },
            SimulationConfig { generations_per_second: Some(-1.0), ..base.clone() },
        ];
        for config in cases {
            assert!(config.clone().validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimulationConfig::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

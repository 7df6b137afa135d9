use crate::domain::Grid;

/// Where the current grid is drawn after every change
pub trait Presenter {
    fn render(&mut self, grid: &Grid);
}

/// Durable slot for the latest grid snapshot.
/// Failures are the implementation's to log; callers never see them.
pub trait GridStore {
    fn save(&mut self, grid: &Grid);

    /// The stored grid, or `None` when nothing usable is stored
    fn load(&self) -> Option<Grid>;
}

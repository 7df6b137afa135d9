//! Latest-state grid snapshot.
//!
//! The stored value is a JSON array of rows, each an array of 0/1 integers.
//! There is no dimension header; the shape is whatever the rows describe.

use log::warn;
use thiserror::Error;

use super::store::{KeyValueStore, StoreError};
use crate::application::GridStore;
use crate::domain::{Grid, GridError};

/// Slot the snapshot lives under
pub const SNAPSHOT_KEY: &str = "life.grid";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("snapshot is not a nested integer array")]
    Json(#[from] serde_json::Error),
    #[error("snapshot has an invalid shape")]
    Shape(#[from] GridError),
}

pub fn encode(grid: &Grid) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&grid.to_bits())?)
}

pub fn decode(text: &str) -> Result<Grid, SnapshotError> {
    let bits: Vec<Vec<u8>> = serde_json::from_str(text)?;
    Ok(Grid::from_bits(&bits)?)
}

/// Grid snapshots kept in a key/value backend
#[derive(Debug)]
pub struct SnapshotStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> SnapshotStore<K> {
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, SNAPSHOT_KEY)
    }

    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn try_save(&mut self, grid: &Grid) -> Result<(), SnapshotError> {
        let text = encode(grid)?;
        self.backend.set(&self.key, text)?;
        Ok(())
    }

    /// `Ok(None)` when the slot is empty
    pub fn try_load(&self) -> Result<Option<Grid>, SnapshotError> {
        self.backend
            .get(&self.key)
            .map(|text| decode(&text))
            .transpose()
    }
}

impl<K: KeyValueStore> GridStore for SnapshotStore<K> {
    fn save(&mut self, grid: &Grid) {
        if let Err(e) = self.try_save(grid) {
            warn!("Failed to save grid snapshot: {e}");
        }
    }

    fn load(&self) -> Option<Grid> {
        self.try_load().unwrap_or_else(|e| {
            warn!("Discarding unreadable grid snapshot: {e}");
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_format_is_row_major_bits() {
        let mut grid = Grid::new(2, 3);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        assert_eq!(encode(&grid).unwrap(), "[[0,0,1],[1,0,0]]");
        assert_eq!(decode("[[0,0,1],[1,0,0]]").unwrap(), grid);
    }

    #[test]
    fn test_empty_slot_is_absent() {
        let store = SnapshotStore::new(MemoryStore::new());
        assert!(store.try_load().unwrap().is_none());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut grid = Grid::new(4, 4);
        grid.set(3, 3, Cell::Alive);
        let mut store = SnapshotStore::new(MemoryStore::new());
        store.save(&grid);
        assert_eq!(store.load(), Some(grid));
    }

    #[test]
    fn test_corrupt_snapshots_are_absent() {
        for bad in ["not json", "{}", "[[0,1],[1]]", "[[0,2]]", "[]", "[[true]]", "[[0,-1]]"] {
            let mut backend = MemoryStore::new();
            backend.set(SNAPSHOT_KEY, bad.to_owned()).unwrap();
            let store = SnapshotStore::new(backend);
            assert!(store.try_load().is_err(), "{bad}");
            assert_eq!(store.load(), None, "{bad}");
        }
    }

    #[test]
    fn test_custom_key() {
        let mut store = SnapshotStore::with_key(MemoryStore::new(), "alt");
        store.save(&Grid::new(1, 1));
        assert!(store.backend().get("alt").is_some());
        assert!(store.backend().get(SNAPSHOT_KEY).is_none());
    }

    proptest! {
        #[test]
        fn proptest_snapshot_round_trip(
            bits in (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
                proptest::collection::vec(proptest::collection::vec(0u8..=1, cols), rows)
            })
        ) {
            let grid = Grid::from_bits(&bits).unwrap();
            let mut store = SnapshotStore::new(MemoryStore::new());
            store.save(&grid);
            prop_assert_eq!(store.load(), Some(grid));
        }
    }
}

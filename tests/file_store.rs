use std::fs;
use std::path::PathBuf;
use torus_life::persistence::{FileStore, SnapshotStore, SNAPSHOT_KEY};
use torus_life::{FrameQueue, Grid, GridStore, Presenter, Simulation, SimulationConfig};

struct Blank;

impl Presenter for Blank {
    fn render(&mut self, _grid: &Grid) {}
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("torus_life_it_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("store.json")
}

fn session(path: &PathBuf, rows: usize, cols: usize) -> Simulation<FrameQueue, SnapshotStore<FileStore>, Blank> {
    let config = SimulationConfig {
        rows,
        cols,
        seed: Some(5),
        store_path: path.clone(),
        ..SimulationConfig::default()
    };
    let backend = FileStore::open(&config.store_path);
    Simulation::new(&config, FrameQueue::new(), SnapshotStore::new(backend), Blank)
}

#[test]
fn grid_survives_process_restart() {
    let path = scratch("restart");
    let mut first = session(&path, 10, 12);
    first.randomize();
    first.step();
    let expected = first.grid().clone();
    drop(first);

    let second = session(&path, 10, 12);
    assert_eq!(second.grid(), &expected);
}

#[test]
fn save_load_round_trip_on_disk() {
    let path = scratch("round_trip");
    let mut grid = Grid::new(3, 7);
    grid.toggle(6, 2);
    grid.toggle(0, 1);

    let mut store = SnapshotStore::new(FileStore::open(&path));
    store.save(&grid);

    let reopened = SnapshotStore::new(FileStore::open(&path));
    assert_eq!(reopened.load(), Some(grid));
}

#[test]
fn unreadable_store_file_falls_back_to_dead_grid() {
    let path = scratch("garbage");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, [0xff, 0x00, 0x13]).unwrap();

    let mut sim = session(&path, 4, 4);
    assert!(sim.grid().is_empty());

    // The next save rewrites the file in the expected format
    sim.toggle_cell(2, 1);
    let store = FileStore::open(&path);
    let snapshot = torus_life::persistence::KeyValueStore::get(&store, SNAPSHOT_KEY).unwrap();
    assert_eq!(snapshot, "[[0,0,0,0],[0,0,1,0],[0,0,0,0],[0,0,0,0]]");
}

#[test]
fn store_path_that_cannot_be_read_starts_dead() {
    let path = scratch("directory");
    fs::create_dir_all(&path).unwrap();

    let mut sim = session(&path, 4, 4);
    assert!(sim.grid().is_empty());

    // Saves fail against a directory but the session keeps going
    sim.toggle_cell(1, 2);
    sim.step();
    assert_eq!(sim.generation(), 1);
    assert!(sim.grid().is_empty());
    assert!(path.is_dir());
}

mod snapshot;
mod store;

pub use snapshot::{decode, encode, SnapshotError, SnapshotStore, SNAPSHOT_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

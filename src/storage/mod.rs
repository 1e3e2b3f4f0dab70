//! Snapshot persistence for decks
//!
//! The whole deck collection is one opaque JSON blob behind a pluggable
//! key-value `SnapshotStore`; every mutating operation rewrites the
//! snapshot. Corrupt or missing data degrades to an empty collection.

mod deck_store;
mod snapshot;

use thiserror::Error;

pub use deck_store::DeckStore;
pub use snapshot::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

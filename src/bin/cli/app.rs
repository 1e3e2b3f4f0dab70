use std::path::PathBuf;

use anyhow::{Context, Result};

use mnemo_lib::srs::models::Deck;
use mnemo_lib::storage::{DeckStore, FileSnapshotStore};

/// Shared application state for CLI commands
pub struct App {
    pub store: DeckStore,
}

impl App {
    /// Open the deck store in the given or default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => FileSnapshotStore::default_data_dir()
                .context("Failed to get data directory")?,
        };
        let snapshots = FileSnapshotStore::new(dir)
            .context("Failed to open data directory")?;
        Ok(Self {
            store: DeckStore::open(Box::new(snapshots)),
        })
    }

    /// Select a deck by name, or keep the default (first) deck
    pub fn select_deck(&mut self, name: Option<&str>) -> Result<()> {
        if let Some(name) = name {
            self.store
                .select(name)
                .with_context(|| format!("Deck '{}' not found", name))?;
        }
        Ok(())
    }

    /// The active deck, or an error telling the user to import first
    pub fn active_deck(&self) -> Result<&Deck> {
        self.store
            .active_deck()
            .context("No decks yet. Import vocabulary first: mnemo import <file.csv>")
    }
}

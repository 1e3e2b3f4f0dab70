//! Deck collection ownership and persistence

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::warn;

use super::{Result, SnapshotStore, StorageError};
use crate::srs::models::{Card, CardContent, Deck};

/// Storage key for the full deck snapshot
const DECKS_KEY: &str = "srs_decks_v1";

/// Storage key for the lifetime streak counter
const STREAK_KEY: &str = "streak_life";

/// Owns all decks and persists them as one atomic snapshot.
///
/// Every mutating operation (answer commit, import, restore) is followed by
/// a whole-snapshot overwrite; there are no partial writes. A corrupt or
/// absent snapshot loads as an empty collection, never an error.
pub struct DeckStore {
    store: Box<dyn SnapshotStore>,
    decks: BTreeMap<String, Deck>,
    active: Option<String>,
}

impl DeckStore {
    /// Open the store, loading whatever snapshot exists
    pub fn open(store: Box<dyn SnapshotStore>) -> Self {
        let decks = match store.read(DECKS_KEY) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(decks) => decks,
                Err(err) => {
                    warn!("deck snapshot is corrupt, starting empty: {}", err);
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                warn!("could not read deck snapshot, starting empty: {}", err);
                BTreeMap::new()
            }
        };
        let active = decks.keys().next().cloned();
        Self {
            store,
            decks,
            active,
        }
    }

    pub fn deck_names(&self) -> Vec<&str> {
        self.decks.keys().map(|s| s.as_str()).collect()
    }

    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.get(name)
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Make a deck the target of study and import operations
    pub fn select(&mut self, name: &str) -> Result<()> {
        if !self.decks.contains_key(name) {
            return Err(StorageError::DeckNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// The active deck (first deck by name when none was selected)
    pub fn active_deck(&self) -> Option<&Deck> {
        self.active.as_ref().and_then(|name| self.decks.get(name))
    }

    pub fn active_deck_mut(&mut self) -> Option<&mut Deck> {
        let name = self.active.clone()?;
        self.decks.get_mut(&name)
    }

    /// Overwrite the persisted snapshot with the current deck collection
    pub fn persist(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.decks)?;
        self.store.write(DECKS_KEY, &text)
    }

    /// Append cards to a deck (created if absent) and persist.
    /// Returns the number of cards added.
    pub fn import_cards(
        &mut self,
        deck_name: &str,
        contents: Vec<CardContent>,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let added = contents.len();
        let deck = self
            .decks
            .entry(deck_name.to_string())
            .or_insert_with(|| Deck::new(deck_name.to_string(), now));
        deck.cards.extend(contents.into_iter().map(Card::new));
        if self.active.is_none() {
            self.active = Some(deck_name.to_string());
        }
        self.persist()?;
        Ok(added)
    }

    /// Emit the full snapshot as pretty-printed JSON.
    /// Export-then-restore reproduces identical card state.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.decks)?)
    }

    /// Replace the whole deck collection from exported JSON and persist.
    /// Unlike snapshot loading this surfaces parse errors: the user asked
    /// for this specific file to be applied.
    pub fn restore_json(&mut self, text: &str) -> Result<usize> {
        let decks: BTreeMap<String, Deck> = serde_json::from_str(text)?;
        self.decks = decks;
        self.active = self.decks.keys().next().cloned();
        self.persist()?;
        Ok(self.decks.len())
    }

    /// Lifetime streak counter, kept outside the deck blob so a bad deck
    /// snapshot cannot reset it. Malformed values read as 0.
    pub fn lifetime_streak(&self) -> u32 {
        match self.store.read(STREAK_KEY) {
            Ok(Some(text)) => text.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn set_lifetime_streak(&mut self, value: u32) -> Result<()> {
        self.store.write(STREAK_KEY, &value.to_string())
    }

    /// Read a small persisted preference (e.g. the typing answer mode)
    pub fn read_setting(&self, key: &str) -> Option<String> {
        self.store.read(key).ok().flatten()
    }

    pub fn write_setting(&mut self, key: &str, value: &str) -> Result<()> {
        self.store.write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySnapshotStore;

    fn content(chars: &str) -> CardContent {
        CardContent {
            mandarin: String::new(),
            hakka_chars: chars.to_string(),
            pronunciation: "a1".to_string(),
            english: "x".to_string(),
        }
    }

    #[test]
    fn test_open_empty() {
        let store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        assert!(store.is_empty());
        assert!(store.active_deck().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let blob = MemorySnapshotStore::with_entry(DECKS_KEY, "{not json!");
        let store = DeckStore::open(Box::new(blob));
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_creates_deck_and_persists() {
        let now = Utc::now();
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));

        let added = store
            .import_cards("Hakka Basics", vec![content("一"), content("二")], now)
            .unwrap();

        assert_eq!(added, 2);
        let deck = store.active_deck().unwrap();
        assert_eq!(deck.name, "Hakka Basics");
        assert_eq!(deck.cards.len(), 2);
    }

    #[test]
    fn test_import_appends_to_existing_deck() {
        let now = Utc::now();
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        store.import_cards("Deck", vec![content("一")], now).unwrap();
        store.import_cards("Deck", vec![content("二")], now).unwrap();

        assert_eq!(store.active_deck().unwrap().cards.len(), 2);
        assert_eq!(store.deck_count(), 1);
    }

    #[test]
    fn test_select_unknown_deck() {
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        assert!(matches!(
            store.select("missing"),
            Err(StorageError::DeckNotFound(_))
        ));
    }

    #[test]
    fn test_export_restore_round_trip() {
        let now = Utc::now();
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        store
            .import_cards("Deck", vec![content("一"), content("二")], now)
            .unwrap();

        // Give one card non-trivial scheduling state
        {
            let deck = store.active_deck_mut().unwrap();
            let card = &mut deck.cards[0];
            card.reps = 3;
            card.ease = 2.36;
            card.interval = 7.0;
            card.due = Some(now + chrono::Duration::days(7));
            card.record_outcome(true, now);
        }
        store.persist().unwrap();
        let original = store.active_deck().unwrap().clone();

        let exported = store.export_json().unwrap();
        let mut other = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        other.restore_json(&exported).unwrap();

        assert_eq!(other.active_deck().unwrap(), &original);
    }

    #[test]
    fn test_restore_rejects_invalid_json() {
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        assert!(store.restore_json("nope").is_err());
    }

    #[test]
    fn test_persisted_state_survives_reopen() {
        let now = Utc::now();
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        store.import_cards("Deck", vec![content("一")], now).unwrap();
        let exported = store.export_json().unwrap();

        // Reopen from a snapshot blob containing the same data
        let reopened = DeckStore::open(Box::new(MemorySnapshotStore::with_entry(
            DECKS_KEY, &exported,
        )));
        assert_eq!(reopened.deck_count(), 1);
        assert_eq!(reopened.active_deck().unwrap().cards.len(), 1);
    }

    #[test]
    fn test_lifetime_streak() {
        let mut store = DeckStore::open(Box::new(MemorySnapshotStore::new()));
        assert_eq!(store.lifetime_streak(), 0);
        store.set_lifetime_streak(12).unwrap();
        assert_eq!(store.lifetime_streak(), 12);

        // Malformed persisted value reads as 0
        let bad = DeckStore::open(Box::new(MemorySnapshotStore::with_entry(
            STREAK_KEY, "wat",
        )));
        assert_eq!(bad.lifetime_streak(), 0);
    }
}

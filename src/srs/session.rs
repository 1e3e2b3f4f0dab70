//! Session-scoped review queue
//!
//! A `ReviewSession` is the explicit context for one study sitting: which
//! deck indices are due, where the cursor sits, and the session streak.
//! It is ephemeral and never persisted; rebuild it whenever the due set may
//! have changed (session entry and after every rating).

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::models::Deck;

/// Due-card queue plus cursor for one study session
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    queue: Vec<usize>,
    cursor: Option<usize>,
    streak: u32,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the due set from the deck and reshuffle it.
    ///
    /// This is the single source of truth for "what is due right now": all
    /// indices whose card is due at `now` (never-scheduled cards always
    /// qualify), in randomized order so the study order varies between
    /// sessions. Cursor lands on the first entry, or `None` if nothing is
    /// due.
    pub fn rebuild(&mut self, deck: &Deck, now: DateTime<Utc>, rng: &mut impl Rng) {
        let mut due: Vec<usize> = deck
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_due(now))
            .map(|(i, _)| i)
            .collect();
        due.shuffle(rng);
        self.cursor = if due.is_empty() { None } else { Some(0) };
        self.queue = due;
    }

    /// Deck index of the card at the cursor, if any
    pub fn current(&self) -> Option<usize> {
        self.cursor.map(|pos| self.queue[pos])
    }

    /// Remove the just-answered entry at the cursor so it cannot be shown
    /// again before the next rebuild, then clamp the cursor.
    pub fn complete_current(&mut self) {
        let Some(pos) = self.cursor else {
            return;
        };
        self.queue.remove(pos);
        self.cursor = if self.queue.is_empty() {
            None
        } else {
            Some(pos.min(self.queue.len() - 1))
        };
    }

    /// Number of cards still due this session
    pub fn due_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue contents in presentation order (mainly for inspection)
    pub fn queue(&self) -> &[usize] {
        &self.queue
    }

    /// Session-scoped streak of non-lapse answers. Display only; never
    /// consulted by the scheduler or the queue.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn bump_streak(&mut self) {
        self.streak += 1;
    }
}

/// Uniform random pick over the whole deck: the free-practice fallback when
/// nothing is due.
pub fn practice_pick(deck: &Deck, rng: &mut impl Rng) -> Option<usize> {
    if deck.cards.is_empty() {
        None
    } else {
        Some(rng.gen_range(0..deck.cards.len()))
    }
}

//! Data models for the spaced repetition system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured vocabulary payload of a card.
///
/// Validated once at import time (`hakka_chars` and `pronunciation` must be
/// non-empty); the scheduler never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    #[serde(default)]
    pub mandarin: String,
    pub hakka_chars: String,
    pub pronunciation: String,
    #[serde(default)]
    pub english: String,
}

impl CardContent {
    /// Label used when the card appears as an answer option: the English
    /// definition when present, otherwise the Mandarin, otherwise the
    /// pronunciation.
    pub fn answer_label(&self) -> &str {
        if !self.english.is_empty() {
            &self.english
        } else if !self.mandarin.is_empty() {
            &self.mandarin
        } else {
            &self.pronunciation
        }
    }
}

/// One vocabulary card with its scheduling and performance state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub content: CardContent,

    /// Completed scheduling cycles since the last lapse
    #[serde(default)]
    pub reps: u32,
    /// SM-2 ease factor (default 2.5, floor 1.3)
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Current scheduled gap in days (fractional allowed)
    #[serde(default)]
    pub interval: f64,
    /// When the card next becomes eligible; `None` = never scheduled,
    /// which counts as due
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seen_count: u32,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub incorrect_count: u32,
    #[serde(default)]
    pub studied: bool,
}

fn default_ease() -> f64 {
    2.5
}

impl Card {
    pub fn new(content: CardContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            reps: 0,
            ease: default_ease(),
            interval: 0.0,
            due: None,
            first_seen_at: None,
            last_seen_at: None,
            seen_count: 0,
            correct_count: 0,
            incorrect_count: 0,
            studied: false,
        }
    }

    /// Check if the card is due for review at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.due {
            None => true,
            Some(due) => due <= now,
        }
    }

    /// Record the outcome of one study event.
    ///
    /// Independent of the scheduler: both are invoked together on every
    /// answer, but the counters stay accurate even if the scheduling policy
    /// changes. Maintains `seen_count == correct_count + incorrect_count`.
    pub fn record_outcome(&mut self, correct: bool, now: DateTime<Utc>) {
        if self.first_seen_at.is_none() {
            self.first_seen_at = Some(now);
        }
        self.last_seen_at = Some(now);
        self.seen_count += 1;
        if correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
        self.studied = true;
    }
}

/// A named, ordered collection of cards; the unit of persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: String, now: DateTime<Utc>) -> Self {
        Self {
            name,
            created_at: now,
            cards: Vec::new(),
        }
    }

    /// Summarize the deck's study state at `now`
    pub fn stats(&self, now: DateTime<Utc>) -> DeckStats {
        let total = self.cards.len();
        let due = self.cards.iter().filter(|c| c.is_due(now)).count();
        let new_cards = self.cards.iter().filter(|c| c.reps == 0).count();
        let learned = self.cards.iter().filter(|c| c.reps > 0).count();
        let mistakes = self
            .cards
            .iter()
            .filter(|c| c.incorrect_count > 0)
            .count();
        DeckStats {
            total,
            due,
            new_cards,
            review: due.saturating_sub(new_cards),
            learned,
            mistakes,
        }
    }
}

/// Counters shown on the stats surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total: usize,
    /// Cards eligible right now (never-scheduled cards included)
    pub due: usize,
    /// Cards never successfully scheduled (`reps == 0`)
    pub new_cards: usize,
    /// Due cards that are not new
    pub review: usize,
    /// Cards with at least one completed rep
    pub learned: usize,
    /// Cards answered incorrectly at least once
    pub mistakes: usize,
}

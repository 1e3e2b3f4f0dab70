//! Typed-answer study mode
//!
//! The user types the answer for one of three fields; comparison is
//! trimmed and case-insensitive. Correctness is binary and translates to
//! `Good`/`Again`. The chosen answer field persists across sessions.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::commit_answer;
use crate::srs::algorithm::Rating;
use crate::srs::models::Card;
use crate::srs::session::ReviewSession;
use crate::storage::{DeckStore, Result};

/// Storage key for the persisted mode preference
const TYPING_MODE_KEY: &str = "typing_mode";

/// Which field the user is asked to type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingMode {
    #[default]
    English,
    Mandarin,
    Pronunciation,
}

impl TypingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TypingMode::English => "eng",
            TypingMode::Mandarin => "mandarin",
            TypingMode::Pronunciation => "pronunciation",
        }
    }

    /// Parse a stored or user-supplied mode name; unknown values fall back
    /// to the default.
    pub fn from_input(s: &str) -> TypingMode {
        match s.trim().to_lowercase().as_str() {
            "mandarin" => TypingMode::Mandarin,
            "pronunciation" | "pinyim" => TypingMode::Pronunciation,
            _ => TypingMode::English,
        }
    }

    /// Prompt text describing what to type
    pub fn prompt(self) -> &'static str {
        match self {
            TypingMode::English => "Type the English definition",
            TypingMode::Mandarin => "輸入普通中文",
            TypingMode::Pronunciation => {
                "Type the Hakka pronunciation with number tones (e.g. lui4 zui4)"
            }
        }
    }
}

/// The answer the card expects under a given mode
pub fn expected_answer(card: &Card, mode: TypingMode) -> &str {
    match mode {
        TypingMode::English => &card.content.english,
        TypingMode::Mandarin => &card.content.mandarin,
        TypingMode::Pronunciation => &card.content.pronunciation,
    }
}

/// Case-insensitive, whitespace-trimmed comparison
pub fn check_answer(answer: &str, expected: &str) -> bool {
    answer.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Commit a typed answer for the given card
pub fn submit(
    store: &mut DeckStore,
    session: &mut ReviewSession,
    card_idx: usize,
    correct: bool,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<()> {
    let rating = if correct { Rating::Good } else { Rating::Again };
    commit_answer(store, session, card_idx, rating, now, rng)
}

/// Load the persisted mode preference (default when absent or unknown)
pub fn load_mode(store: &DeckStore) -> TypingMode {
    store
        .read_setting(TYPING_MODE_KEY)
        .map(|s| TypingMode::from_input(&s))
        .unwrap_or_default()
}

pub fn save_mode(store: &mut DeckStore, mode: TypingMode) -> Result<()> {
    store.write_setting(TYPING_MODE_KEY, mode.as_str())
}
